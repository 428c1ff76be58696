//! User-creation payload, its validation rules, and its documentation schema.
//!
//! DESIGN
//! ======
//! Validation runs on the raw JSON payload rather than on a deserialized
//! struct, so a wrong-typed field is reported as a violation next to every
//! other failing field instead of aborting at the first serde error.
//!
//! | field      | rules                         |
//! |------------|-------------------------------|
//! | `email`    | required, valid email         |
//! | `name`     | optional, string              |
//! | `password` | required, string, ≥ 6 chars   |
//! | `isActive` | optional, boolean             |
//!
//! `null` counts as absent for optional fields.

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::email::is_email;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Payload accepted by `POST /v1/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateUserDto {
    /// Validate a raw payload and build the DTO from it.
    ///
    /// # Errors
    ///
    /// Returns every field-level violation found in `payload`.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let violations = validate_create_user(payload);
        if !violations.is_empty() {
            return Err(ValidationErrors { violations });
        }

        Ok(Self {
            email: string_field(payload, "email").unwrap_or_default(),
            name: string_field(payload, "name"),
            password: string_field(payload, "password").unwrap_or_default(),
            is_active: payload.get("isActive").and_then(Value::as_bool),
        })
    }

    /// Re-check an already-typed DTO; only value rules can fail here.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldViolation> {
        validate_create_user(&self.to_payload())
    }

    /// Render the DTO in wire form.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut map = Map::new();
        map.insert("email".to_owned(), Value::String(self.email.clone()));
        if let Some(name) = &self.name {
            map.insert("name".to_owned(), Value::String(name.clone()));
        }
        map.insert("password".to_owned(), Value::String(self.password.clone()));
        if let Some(is_active) = self.is_active {
            map.insert("isActive".to_owned(), Value::Bool(is_active));
        }
        Value::Object(map)
    }
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_owned)
}

// =============================================================================
// VIOLATIONS
// =============================================================================

/// Rule a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Constraint {
    IsEmail,
    IsString,
    MinLength,
    IsBoolean,
}

/// One failed rule on one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, constraint: Constraint, message: String) -> Self {
        Self { field: field.to_owned(), constraint, message }
    }
}

/// All violations found in a rejected payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed for {}", summarize(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Distinct failing field names, in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }

    /// Violations recorded against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    let errors = ValidationErrors { violations: violations.to_vec() };
    errors.fields().join(", ")
}

// =============================================================================
// RULES
// =============================================================================

/// Check a candidate creation payload and return every violation.
///
/// A non-object payload is treated as an object with no fields, so it fails
/// on both required fields.
#[must_use]
pub fn validate_create_user(payload: &Value) -> Vec<FieldViolation> {
    let empty = Map::new();
    let object = payload.as_object().unwrap_or(&empty);
    let mut violations = Vec::new();

    check_email(present(object, "email"), &mut violations);
    check_optional_string("name", present(object, "name"), &mut violations);
    check_password(present(object, "password"), &mut violations);
    check_optional_bool("isActive", present(object, "isActive"), &mut violations);

    violations
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn check_email(value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    let valid = matches!(value, Some(Value::String(s)) if is_email(s));
    if !valid {
        out.push(FieldViolation::new("email", Constraint::IsEmail, "email must be an email".to_owned()));
    }
}

fn check_password(value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    let length_message =
        format!("password must be longer than or equal to {PASSWORD_MIN_LENGTH} characters");
    match value {
        Some(Value::String(s)) => {
            if s.chars().count() < PASSWORD_MIN_LENGTH {
                out.push(FieldViolation::new("password", Constraint::MinLength, length_message));
            }
        }
        _ => {
            out.push(FieldViolation::new("password", Constraint::IsString, "password must be a string".to_owned()));
            out.push(FieldViolation::new("password", Constraint::MinLength, length_message));
        }
    }
}

fn check_optional_string(field: &str, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    if let Some(value) = value {
        if !value.is_string() {
            out.push(FieldViolation::new(field, Constraint::IsString, format!("{field} must be a string")));
        }
    }
}

fn check_optional_bool(field: &str, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    if let Some(value) = value {
        if !value.is_boolean() {
            out.push(FieldViolation::new(field, Constraint::IsBoolean, format!("{field} must be a boolean value")));
        }
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

/// Documentation schema for the creation payload, served alongside the API.
#[must_use]
pub fn create_user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["email", "password"],
        "properties": {
            "email": {
                "type": "string",
                "format": "email",
                "example": "john@example.com"
            },
            "name": {
                "type": "string",
                "example": "John Doe"
            },
            "password": {
                "type": "string",
                "minLength": PASSWORD_MIN_LENGTH,
                "example": "password123"
            },
            "isActive": {
                "type": "boolean",
                "example": true,
                "description": "User active status"
            }
        }
    })
}
