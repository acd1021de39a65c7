use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com  ", "secreto"),
        Ok(LoginInput { email: "ana@example.com".to_owned(), password: "secreto".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_as_typed() {
    let input = validate_login_input("ana@example.com", " con espacios ").unwrap();
    assert_eq!(input.password, " con espacios ");
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secreto"), Err(LoginInputError::MissingEmail));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    for email in ["ana", "@example.com", "ana@", "ana@@example.com"] {
        assert_eq!(
            validate_login_input(email, "secreto"),
            Err(LoginInputError::InvalidEmail),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("ana@example.com", ""), Err(LoginInputError::MissingPassword));
}

#[test]
fn email_error_wins_over_password_error() {
    assert_eq!(validate_login_input("", ""), Err(LoginInputError::MissingEmail));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(LoginInputError::MissingEmail.to_string(), "Ingresa tu correo electrónico.");
    assert_eq!(LoginInputError::InvalidEmail.to_string(), "El correo electrónico no es válido.");
    assert_eq!(LoginInputError::MissingPassword.to_string(), "Ingresa tu contraseña.");
}

#[test]
fn accepted_log_line_names_email_and_target() {
    let input = validate_login_input(" ana@example.com ", "secreto").unwrap();
    let line = accepted_log_line(&input);
    assert_eq!(line, "login form accepted for ana@example.com, opening /dashboard");
    assert!(!line.contains("secreto"));
}
