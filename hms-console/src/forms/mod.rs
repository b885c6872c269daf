//! Forms with field validation
//!
//! A form holds what the user typed. Attribute rules come from
//! [`validator::Validate`]; rules spanning several fields go in
//! [`Form::check_fields`]. Either way the result is a [`FormErrors`] map keyed
//! by snake_case field name, and nothing is sent while it is non-empty.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

mod finance;
mod hr;
mod schedule;
mod time_off;

pub use finance::{DepositForm, PayInvoiceForm, RefundForm};
pub use hr::{AccountForm, EmployeeForm};
pub use schedule::{AvailabilityForm, DoctorScheduleForm, EmployeeScheduleForm, WorkShiftForm};
pub use time_off::TimeOffForm;

pub const MSG_REQUIRED: &str = "Trường này là bắt buộc";
pub const MSG_POSITIVE: &str = "Số tiền phải lớn hơn 0";
pub const MSG_END_BEFORE_START: &str = "Thời điểm kết thúc phải sau thời điểm bắt đầu";

/// Field name → message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record an error; the first message for a field is kept
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::ops::Index<&str> for FormErrors {
    type Output = str;

    fn index(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FormErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(err) = list.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&err.code).to_string());
                out.add(&field, message);
            }
        }
        out
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        "required" | "not_blank" => MSG_REQUIRED,
        "positive" => MSG_POSITIVE,
        "length" => "Độ dài không hợp lệ",
        "range" => "Giá trị nằm ngoài khoảng cho phép",
        "email" => "Email không hợp lệ",
        _ => "Giá trị không hợp lệ",
    }
}

/// A validated form that produces a create payload
pub trait Form: Validate {
    type Create;

    /// Cross-field rules
    fn check_fields(&self, _errors: &mut FormErrors) {}

    /// Every problem with the current input
    fn errors(&self) -> FormErrors {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::new(),
            Err(e) => FormErrors::from(e),
        };
        self.check_fields(&mut errors);
        errors
    }

    fn check(&self) -> Result<(), FormErrors> {
        self.errors().into_result()
    }

    fn to_create(&self) -> Result<Self::Create, FormErrors>;
}

/// A form that can also edit an existing record
pub trait EditForm: Form {
    type Update;

    fn to_update(&self) -> Result<Self::Update, FormErrors>;
}

// ========== Validator functions ==========

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(MSG_REQUIRED.into()));
    }
    Ok(())
}

pub(crate) fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("positive").with_message(MSG_POSITIVE.into()));
    }
    Ok(())
}

// ========== Payload helpers ==========

/// Take a required value out of an `Option` field
pub(crate) fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T, FormErrors> {
    value
        .clone()
        .ok_or_else(|| FormErrors::single(field, MSG_REQUIRED))
}

/// Trimmed text, `None` when blank
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Require `end >= start` when both are set, reporting on `end_field`
pub(crate) fn check_order<T: PartialOrd>(
    start: Option<&T>,
    end: Option<&T>,
    end_field: &str,
    errors: &mut FormErrors,
) {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        errors.add(end_field, MSG_END_BEFORE_START);
    }
}
