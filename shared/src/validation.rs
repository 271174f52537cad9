//! Input validation for registration and login
//!
//! Validation failures are itemized per field so the caller can surface
//! every problem in one response rather than the first one found.

use crate::errors::FieldError;
use crate::models::Role;
use crate::types::RegisterRequest;
use validator::ValidateEmail;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a registration request
///
/// Returns the parsed role on success, or every field error at once.
pub fn validate_registration(req: &RegisterRequest) -> Result<Role, Vec<FieldError>> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if !req.email.validate_email() {
        errors.push(FieldError::new("email", "Enter a valid email"));
    }

    if req.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    let role = Role::parse(&req.role);
    if role.is_none() {
        errors.push(FieldError::new("role", "Invalid role"));
    }

    match role {
        Some(role) if errors.is_empty() => Ok(role),
        _ => Err(errors),
    }
}

/// Validate a login request
///
/// Mirrors the registration rules that apply at login time: a well-formed
/// email and a non-empty password.
pub fn validate_login(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !email.validate_email() {
        errors.push(FieldError::new("email", "Enter a valid email"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(name: &str, email: &str, password: &str, role: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        let req = request("Ana", "ana@x.com", "secret1", "client");
        assert_eq!(validate_registration(&req).unwrap(), Role::Client);
    }

    #[rstest]
    #[case("", "ana@x.com", "secret1", "client", "name")]
    #[case("   ", "ana@x.com", "secret1", "client", "name")]
    #[case("Ana", "not-an-email", "secret1", "client", "email")]
    #[case("Ana", "ana@x.com", "short", "client", "password")]
    #[case("Ana", "ana@x.com", "secret1", "admin", "role")]
    fn rejects_invalid_field(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] role: &str,
        #[case] expected_field: &str,
    ) {
        let req = request(name, email, password, role);
        let errors = validate_registration(&req).unwrap_err();
        assert!(
            errors.iter().any(|e| e.field == expected_field),
            "expected an error for field {expected_field}, got {errors:?}"
        );
    }

    #[test]
    fn reports_all_failures_at_once() {
        let req = request("", "bad", "x", "nope");
        let errors = validate_registration(&req).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn password_boundary_is_six_characters() {
        let req = request("Ana", "ana@x.com", "123456", "freelancer");
        assert_eq!(validate_registration(&req).unwrap(), Role::Freelancer);

        let req = request("Ana", "ana@x.com", "12345", "freelancer");
        assert!(validate_registration(&req).is_err());
    }

    #[test]
    fn login_requires_well_formed_email_and_password() {
        assert!(validate_login("ana@x.com", "secret1").is_ok());
        assert!(validate_login("nope", "secret1").is_err());
        assert!(validate_login("ana@x.com", "").is_err());
    }
}
