//! Employee API

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, RoleType};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/employees";

#[derive(Debug, Clone)]
pub struct EmployeeApi {
    client: ApiClient,
}

crud_resource!(EmployeeApi, "employee", BASE, Employee, EmployeeCreate, EmployeeUpdate);

impl EmployeeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exact or prefix match on employee code
    pub async fn search_by_code(&self, code: &str) -> ClientResult<Vec<Employee>> {
        self.client
            .get_list(&format!("{BASE}/search/code"), &[("code", code.to_string())])
            .await
    }

    pub async fn search_by_name(&self, name: &str) -> ClientResult<Vec<Employee>> {
        self.client
            .get_list(&format!("{BASE}/search/name"), &[("name", name.to_string())])
            .await
    }

    pub async fn by_department(&self, department_id: i64) -> ClientResult<Vec<Employee>> {
        self.client
            .get_list(&format!("{BASE}/department/{department_id}"), &[])
            .await
    }

    pub async fn by_role(&self, role: RoleType) -> ClientResult<Vec<Employee>> {
        self.client
            .get_list(&format!("{BASE}/role/{}", role.as_str()), &[])
            .await
    }

    pub async fn activate(&self, id: i64) -> ClientResult<()> {
        self.client
            .call_discard::<()>(reqwest::Method::PUT, &format!("{BASE}/{id}/activate"), None)
            .await
    }

    pub async fn deactivate(&self, id: i64) -> ClientResult<()> {
        self.client
            .call_discard::<()>(reqwest::Method::PUT, &format!("{BASE}/{id}/deactivate"), None)
            .await
    }
}
