//! Form input normalisation and validation shared by the views.

/// Trim `input`, mapping blank text to `None`.
pub fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an id typed into a form or picked from a `select`. Blank means none.
pub fn parse_id(input: &str) -> Result<Option<i64>, String> {
    match non_empty(input) {
        None => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("\"{value}\" is not a valid id")),
    }
}

/// Check the login form before sending it.
pub fn validate_login(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

/// Check the registration form before sending it.
pub fn validate_registration(
    username: &str,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if let Some(email) = non_empty(email) {
        if !email.contains('@') {
            return Err("Please enter a valid email".to_string());
        }
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
