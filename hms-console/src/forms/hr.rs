//! Employee and account forms

use chrono::NaiveDate;
use shared::models::{
    AccountCreate, AccountUpdate, EmployeeCreate, EmployeeUpdate, Gender, Person, RoleType,
};
use validator::Validate;

use super::{EditForm, Form, FormErrors, MSG_REQUIRED, not_blank, optional_text, required};

/// Add / edit employee dialog
#[derive(Debug, Clone, Default, Validate)]
pub struct EmployeeForm {
    #[validate(custom(function = "not_blank"), length(max = 20))]
    pub employee_code: String,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 20))]
    pub national_id: Option<String>,
    #[validate(required)]
    pub department_id: Option<i64>,
    #[validate(required)]
    pub role_type: Option<RoleType>,
    pub hire_date: Option<NaiveDate>,
}

impl EmployeeForm {
    /// Prefill from an existing record for editing
    pub fn from_employee(employee: &shared::models::Employee) -> Self {
        let person = &employee.person;
        Self {
            employee_code: employee.employee_code.clone(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            gender: person.gender,
            date_of_birth: person.date_of_birth,
            phone: person.phone.clone(),
            email: person.email.clone(),
            address: person.address.clone(),
            national_id: person.national_id.clone(),
            department_id: employee.department_id,
            role_type: Some(employee.role_type),
            hire_date: employee.hire_date,
        }
    }

    fn person(&self) -> Person {
        Person {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            phone: optional_text(&self.phone),
            email: optional_text(&self.email),
            address: optional_text(&self.address),
            national_id: optional_text(&self.national_id),
        }
    }
}

impl Form for EmployeeForm {
    type Create = EmployeeCreate;

    fn check_fields(&self, errors: &mut FormErrors) {
        if let (Some(dob), Some(hired)) = (self.date_of_birth, self.hire_date)
            && hired <= dob
        {
            errors.add("hire_date", "Ngày vào làm phải sau ngày sinh");
        }
    }

    fn to_create(&self) -> Result<EmployeeCreate, FormErrors> {
        self.check()?;
        Ok(EmployeeCreate {
            employee_code: self.employee_code.trim().to_string(),
            person: self.person(),
            department_id: required(&self.department_id, "department_id")?,
            role_type: required(&self.role_type, "role_type")?,
            hire_date: self.hire_date,
        })
    }
}

impl EditForm for EmployeeForm {
    type Update = EmployeeUpdate;

    fn to_update(&self) -> Result<EmployeeUpdate, FormErrors> {
        self.check()?;
        Ok(EmployeeUpdate {
            person: Some(self.person()),
            department_id: self.department_id,
            role_type: self.role_type,
            is_active: None,
            hire_date: self.hire_date,
        })
    }
}

/// Create / edit account dialog
///
/// The password is only required when creating.
#[derive(Debug, Clone, Default, Validate)]
pub struct AccountForm {
    #[validate(required)]
    pub employee_id: Option<i64>,
    #[validate(custom(function = "not_blank"), length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 6, max = 128, message = "Mật khẩu phải có ít nhất 6 ký tự"))]
    pub password: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    pub is_active: Option<bool>,
}

impl Form for AccountForm {
    type Create = AccountCreate;

    fn to_create(&self) -> Result<AccountCreate, FormErrors> {
        let mut errors = self.errors();
        if optional_text(&self.password).is_none() {
            errors.add("password", MSG_REQUIRED);
        }
        errors.into_result()?;

        Ok(AccountCreate {
            employee_id: required(&self.employee_id, "employee_id")?,
            username: self.username.trim().to_string(),
            password: required(&self.password, "password")?,
            role: self.role.trim().to_ascii_uppercase(),
        })
    }
}

impl EditForm for AccountForm {
    type Update = AccountUpdate;

    fn to_update(&self) -> Result<AccountUpdate, FormErrors> {
        self.check()?;
        Ok(AccountUpdate {
            username: Some(self.username.trim().to_string()),
            role: Some(self.role.trim().to_ascii_uppercase()),
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee() -> EmployeeForm {
        EmployeeForm {
            employee_code: "NV010".into(),
            first_name: " Hoa ".into(),
            last_name: "Nguyen".into(),
            email: Some("hoa@benhvien.vn".into()),
            phone: Some("  ".into()),
            department_id: Some(2),
            role_type: Some(RoleType::Nurse),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_first_name_is_reported() {
        let form = EmployeeForm {
            first_name: "".into(),
            ..valid_employee()
        };
        let errors = form.to_create().unwrap_err();
        assert_eq!(&errors["first_name"], MSG_REQUIRED);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_selects_and_bad_email() {
        let form = EmployeeForm {
            email: Some("not-an-email".into()),
            department_id: None,
            role_type: None,
            ..valid_employee()
        };
        let errors = form.errors();
        assert!(errors.contains("email"));
        assert!(errors.contains("department_id"));
        assert!(errors.contains("role_type"));
    }

    #[test]
    fn test_create_payload_is_trimmed() {
        let payload = valid_employee().to_create().unwrap();
        assert_eq!(payload.person.first_name, "Hoa");
        assert_eq!(payload.person.phone, None);
        assert_eq!(payload.department_id, 2);
    }

    #[test]
    fn test_hire_date_after_birth() {
        let form = EmployeeForm {
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            hire_date: NaiveDate::from_ymd_opt(1989, 1, 1),
            ..valid_employee()
        };
        assert!(form.errors().contains("hire_date"));
    }

    #[test]
    fn test_account_password_required_only_on_create() {
        let form = AccountForm {
            employee_id: Some(3),
            username: "hoa.nguyen".into(),
            password: None,
            role: "nurse".into(),
            is_active: Some(true),
        };
        assert!(form.to_create().unwrap_err().contains("password"));

        let update = form.to_update().unwrap();
        assert_eq!(update.role.as_deref(), Some("NURSE"));

        let short = AccountForm {
            password: Some("123".into()),
            ..form
        };
        assert!(short.to_create().unwrap_err().contains("password"));
    }
}
