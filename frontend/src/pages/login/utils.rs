use crate::api::ApiError;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
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
    use super::validate_credentials;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("dana@example.com", "").is_err());
        assert!(validate_credentials("dana@example.com", "secret").is_ok());
    }
}
