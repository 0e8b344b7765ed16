//! Inline form validation for the login and signup forms.
//!
//! Checks run entirely client-side; a form that fails validation is never
//! submitted to the network. Errors surface per field, next to the input.

const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation errors. An empty set means the form may submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}

fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.len() >= 3
}

#[must_use]
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if !email_is_valid(email) {
        errors.email = Some("Invalid email address".into());
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters".into());
    }
    errors
}

#[must_use]
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if first_name.trim().is_empty() {
        errors.first_name = Some("First name is required.".into());
    }
    if last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required.".into());
    }
    if !email_is_valid(email) {
        errors.email = Some("Please enter a valid email address.".into());
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters long.".into());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_email_fails_inline() {
        let errors = validate_login("abc", "longenough");
        assert!(errors.email.is_some());
        assert!(errors.password.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_short_password_fails() {
        let errors = validate_login("ada@example.com", "12345");
        assert!(errors.password.is_some());
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_valid_login_form_passes() {
        assert!(validate_login("ada@example.com", "secret1").is_empty());
    }

    #[test]
    fn test_signup_requires_names() {
        let errors = validate_signup("", "  ", "ada@example.com", "secret1");
        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_email_edge_cases() {
        assert!(!validate_login("@example.com", "secret1").is_empty());
        assert!(!validate_login("ada@com", "secret1").is_empty());
        assert!(!validate_login("ada@.com", "secret1").is_empty());
        assert!(validate_login("a@b.co", "secret1").is_empty());
    }
}
