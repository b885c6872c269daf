//! Employee management page

use hms_client::{ApiClient, EmployeeApi};
use shared::models::{Employee, RoleType};

use crate::crud::{CrudList, ListFilter, text_matches};
use crate::error::PageResult;
use crate::forms::EmployeeForm;

/// Client-side filter over the loaded employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Matches code or full name
    pub text: Option<String>,
    pub role: Option<RoleType>,
    pub department_id: Option<i64>,
    pub active: Option<bool>,
}

impl ListFilter<Employee> for EmployeeFilter {
    fn matches(&self, e: &Employee) -> bool {
        text_matches(
            self.text.as_deref(),
            &[e.employee_code.as_str(), e.person.full_name().as_str()],
        ) && self.role.is_none_or(|r| r == e.role_type)
            && self
                .department_id
                .is_none_or(|d| e.department_id == Some(d))
            && self.active.is_none_or(|a| a == e.is_active)
    }
}

/// Server-side search criteria
#[derive(Debug, Clone, Default)]
pub struct EmployeeSearch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub department_id: Option<i64>,
    pub role: Option<RoleType>,
}

/// Which endpoint a search goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRoute {
    Code(String),
    Name(String),
    Department(i64),
    Role(RoleType),
    All,
}

impl EmployeeSearch {
    /// First populated criterion wins: code, name, department, role
    pub fn route(&self) -> SearchRoute {
        let text = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        if let Some(code) = text(&self.code) {
            SearchRoute::Code(code)
        } else if let Some(name) = text(&self.name) {
            SearchRoute::Name(name)
        } else if let Some(department_id) = self.department_id {
            SearchRoute::Department(department_id)
        } else if let Some(role) = self.role {
            SearchRoute::Role(role)
        } else {
            SearchRoute::All
        }
    }
}

pub struct EmployeePage {
    list: CrudList<EmployeeApi, EmployeeFilter>,
}

impl EmployeePage {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            list: CrudList::new(client.employees()),
        }
    }

    pub fn list(&self) -> &CrudList<EmployeeApi, EmployeeFilter> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CrudList<EmployeeApi, EmployeeFilter> {
        &mut self.list
    }

    pub async fn load(&mut self) -> PageResult<usize> {
        self.list.load().await
    }

    /// Run a server-side search and show its result
    pub async fn search(&mut self, criteria: &EmployeeSearch) -> PageResult<usize> {
        let route = criteria.route();
        tracing::debug!(?route, "Employee search");

        let api = self.list.resource();
        let found = match route {
            SearchRoute::Code(code) => api.search_by_code(&code).await?,
            SearchRoute::Name(name) => api.search_by_name(&name).await?,
            SearchRoute::Department(id) => api.by_department(id).await?,
            SearchRoute::Role(role) => api.by_role(role).await?,
            SearchRoute::All => return self.load().await,
        };

        let count = found.len();
        self.list.replace_items(found);
        Ok(count)
    }

    pub async fn get(&self, id: i64) -> PageResult<Employee> {
        self.list.get(id).await
    }

    pub async fn create(&mut self, form: &EmployeeForm) -> PageResult<Employee> {
        self.list.create(form).await
    }

    pub async fn update(&mut self, id: i64, form: &EmployeeForm) -> PageResult<Employee> {
        self.list.update(id, form).await
    }

    pub async fn delete(&mut self, id: i64) -> PageResult<()> {
        self.list.delete(id).await
    }

    pub async fn set_active(&mut self, id: i64, active: bool) -> PageResult<()> {
        let api = self.list.resource();
        if active {
            api.activate(id).await?;
        } else {
            api.deactivate(id).await?;
        }
        tracing::info!(employee_id = id, active, "Employee status changed");
        self.list.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Person;

    fn employee(code: &str, first: &str, role: RoleType, active: bool) -> Employee {
        Employee {
            id: 1,
            employee_code: code.into(),
            person: Person {
                first_name: first.into(),
                last_name: "Tran".into(),
                ..Default::default()
            },
            department_id: Some(3),
            department_name: None,
            role_type: role,
            is_active: active,
            has_account: false,
            hire_date: None,
        }
    }

    #[test]
    fn test_route_priority() {
        let all = EmployeeSearch {
            code: Some("NV01".into()),
            name: Some("An".into()),
            department_id: Some(2),
            role: Some(RoleType::Doctor),
        };
        assert_eq!(all.route(), SearchRoute::Code("NV01".into()));

        let blank_code = EmployeeSearch {
            code: Some("  ".into()),
            ..all.clone()
        };
        assert_eq!(blank_code.route(), SearchRoute::Name("An".into()));

        let dept = EmployeeSearch {
            code: None,
            name: None,
            ..all.clone()
        };
        assert_eq!(dept.route(), SearchRoute::Department(2));

        let role = EmployeeSearch {
            role: Some(RoleType::Hr),
            ..Default::default()
        };
        assert_eq!(role.route(), SearchRoute::Role(RoleType::Hr));
        assert_eq!(EmployeeSearch::default().route(), SearchRoute::All);
    }

    #[test]
    fn test_filter() {
        let e = employee("BS001", "An", RoleType::Doctor, true);
        assert!(EmployeeFilter::default().matches(&e));
        assert!(
            EmployeeFilter {
                text: Some("tran an".into()),
                role: Some(RoleType::Doctor),
                department_id: Some(3),
                active: Some(true),
            }
            .matches(&e)
        );
        assert!(
            !EmployeeFilter {
                active: Some(false),
                ..Default::default()
            }
            .matches(&e)
        );
        assert!(
            !EmployeeFilter {
                text: Some("ds".into()),
                ..Default::default()
            }
            .matches(&e)
        );
    }
}
