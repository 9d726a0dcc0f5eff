use crate::api::ApiError;

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_registration;

    #[test]
    fn validate_registration_requires_every_field() {
        assert!(validate_registration("", "dana@example.com", "secret").is_err());
        assert!(validate_registration("Dana", "", "secret").is_err());
        assert!(validate_registration("Dana", "dana@example.com", "").is_err());
        assert!(validate_registration("Dana", "dana@example.com", "secret").is_ok());
    }
}
