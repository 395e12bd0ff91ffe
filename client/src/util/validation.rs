//! Form validation for login, registration, and model generation.
//!
//! Validators take raw input strings and either produce the request payload
//! or a map from field name to the message shown under that field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{AnimationType, GenerateRequest, ModelType, RegisterRequest};

pub const PROMPT_MIN_CHARS: usize = 10;
pub const PROMPT_MAX_CHARS: usize = 500;
pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Field name -> error message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validate the generation form. The prompt is trimmed before counting.
///
/// # Errors
///
/// Returns per-field messages for `prompt` and `model_type`.
pub fn validate_generate(prompt: &str, model_type: &str, animation_type: &str) -> Result<GenerateRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    let prompt = prompt.trim();
    let chars = prompt.chars().count();
    if prompt.is_empty() {
        errors.insert("prompt", "Prompt is required");
    } else if chars < PROMPT_MIN_CHARS {
        errors.insert("prompt", "Prompt should be at least 10 characters");
    } else if chars > PROMPT_MAX_CHARS {
        errors.insert("prompt", "Prompt should not exceed 500 characters");
    }
    let parsed_type = ModelType::parse(model_type);
    if parsed_type.is_none() {
        errors.insert("model_type", "Model type is required");
    }
    match parsed_type {
        Some(model_type) if errors.is_empty() => Ok(GenerateRequest {
            prompt: prompt.to_owned(),
            model_type,
            animation_type: AnimationType::parse(animation_type),
        }),
        _ => Err(errors),
    }
}

/// Validate the login form. Returns the trimmed username and the password.
///
/// # Errors
///
/// Returns per-field messages for `username` and `password`.
pub fn validate_login(username: &str, password: &str) -> Result<(String, String), FieldErrors> {
    let mut errors = FieldErrors::new();
    let username = username.trim();
    if username.is_empty() {
        errors.insert("username", "Username is required");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    if errors.is_empty() { Ok((username.to_owned(), password.to_owned())) } else { Err(errors) }
}

/// Raw register-form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

/// Validate the register form. A blank full name is sent as absent.
///
/// # Errors
///
/// Returns per-field messages for every invalid field.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = form.username.trim();
    let username_chars = username.chars().count();
    if username.is_empty() {
        errors.insert("username", "Username is required");
    } else if username_chars < USERNAME_MIN_CHARS {
        errors.insert("username", "Username must be at least 3 characters");
    } else if username_chars > USERNAME_MAX_CHARS {
        errors.insert("username", "Username must not exceed 20 characters");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email");
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert("password", "Password must be at least 8 characters");
    }

    if form.confirm_password.is_empty() {
        errors.insert("confirm_password", "Confirm your password");
    } else if form.confirm_password != form.password {
        errors.insert("confirm_password", "Passwords must match");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let full_name = form.full_name.trim();
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
    })
}

/// `local@domain.tld` shape check: one `@`, no whitespace, and a dot inside
/// the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.') && !host.ends_with('.'),
        None => false,
    }
}
