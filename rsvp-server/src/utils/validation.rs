//! Input validation helpers
//!
//! Text length limits and the checks shared by the registry operations.
//! SQLite TEXT has no built-in length enforcement, so the limits live here.

use lettre::Address;

use crate::utils::AppError;

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Trim a required guest name and check its length.
pub fn normalize_name(raw: Option<&str>) -> Result<String, AppError> {
    let name = raw.map(str::trim).unwrap_or_default();
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    Ok(name.to_string())
}

/// Companion allowance must be a non-negative integer.
pub fn validate_max_companions(value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "maxCompanions must not be negative (got {value})"
        ))
        .with_detail("field", "maxCompanions"));
    }
    Ok(())
}

/// Trim and lowercase an email address and check it parses as a mail
/// address the SMTP sender will accept.
///
/// Deliverability is still the SMTP server's call.
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
    match email.parse::<Address>() {
        Ok(_) => Ok(email),
        Err(e) => Err(AppError::validation(format!("'{email}' is not a valid email address"))
            .with_detail("field", "email")
            .with_detail("reason", e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Ana", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&accented, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(Some("  Ana López ")).unwrap(), "Ana López");
        assert!(normalize_name(None).is_err());
        assert!(normalize_name(Some("")).is_err());
    }

    #[test]
    fn test_max_companions() {
        assert!(validate_max_companions(0).is_ok());
        assert!(validate_max_companions(3).is_ok());
        let err = validate_max_companions(-1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Ana@X.com ").unwrap(), "ana@x.com");
        assert_eq!(normalize_email("no-at-sign").unwrap_err().code, ErrorCode::ValidationFailed);
        assert_eq!(normalize_email("@x.com").unwrap_err().code, ErrorCode::ValidationFailed);
        assert_eq!(normalize_email("  ").unwrap_err().code, ErrorCode::RequiredField);

        let long = format!("{}@x.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(normalize_email(&long).is_err());
    }

    #[test]
    fn test_email_must_be_a_mail_address() {
        for bad in ["ana lopez@x.com", "ana@x com", "ana@@x.com", "ana@", "a,b@x.com"] {
            let err = normalize_email(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed, "{bad}");
        }
        assert_eq!(normalize_email("ana.lopez+boda@example.com").unwrap(), "ana.lopez+boda@example.com");
    }
}
