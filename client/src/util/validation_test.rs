use super::*;

fn register_form() -> RegisterForm {
    RegisterForm {
        username: "steve".to_owned(),
        email: "steve@example.com".to_owned(),
        password: "hunter2222".to_owned(),
        confirm_password: "hunter2222".to_owned(),
        full_name: String::new(),
    }
}

// =============================================================
// Generation form
// =============================================================

#[test]
fn prompt_is_required() {
    let errors = validate_generate("   ", "character", "").unwrap_err();
    assert_eq!(errors.get("prompt"), Some(&"Prompt is required"));
}

#[test]
fn prompt_length_bounds_count_trimmed_chars() {
    let errors = validate_generate("  too short ", "character", "").unwrap_err();
    assert_eq!(errors.get("prompt"), Some(&"Prompt should be at least 10 characters"));

    assert!(validate_generate("  ninechars  ", "character", "").is_err());
    assert!(validate_generate(" exactly 10 ", "character", "").is_ok());

    let long = "x".repeat(501);
    let errors = validate_generate(&long, "character", "").unwrap_err();
    assert_eq!(errors.get("prompt"), Some(&"Prompt should not exceed 500 characters"));
    assert!(validate_generate(&"x".repeat(500), "character", "").is_ok());
}

#[test]
fn prompt_length_counts_characters_not_bytes() {
    // Ten two-byte characters.
    assert!(validate_generate("éééééééééé", "prop", "").is_ok());
}

#[test]
fn generate_builds_trimmed_request() {
    let req = validate_generate("  a blocky robot knight ", "vehicle", "walk").unwrap();
    assert_eq!(req.prompt, "a blocky robot knight");
    assert_eq!(req.model_type, ModelType::Vehicle);
    assert_eq!(req.animation_type, Some(AnimationType::Walk));
}

#[test]
fn blank_animation_is_none() {
    let req = validate_generate("a blocky robot knight", "character", "").unwrap();
    assert_eq!(req.animation_type, None);
}

#[test]
fn model_type_is_required() {
    let errors = validate_generate("a blocky robot knight", "", "").unwrap_err();
    assert_eq!(errors.get("model_type"), Some(&"Model type is required"));
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(" ", "").unwrap_err();
    assert_eq!(errors.get("username"), Some(&"Username is required"));
    assert_eq!(errors.get("password"), Some(&"Password is required"));
}

#[test]
fn login_trims_username_only() {
    assert_eq!(
        validate_login(" steve ", " pw "),
        Ok(("steve".to_owned(), " pw ".to_owned()))
    );
}

// =============================================================
// Register form
// =============================================================

#[test]
fn register_accepts_valid_form_without_full_name() {
    let req = validate_register(&register_form()).unwrap();
    assert_eq!(req.username, "steve");
    assert_eq!(req.full_name, None);
}

#[test]
fn register_keeps_full_name_when_present() {
    let form = RegisterForm { full_name: "  Steve Block ".to_owned(), ..register_form() };
    assert_eq!(validate_register(&form).unwrap().full_name.as_deref(), Some("Steve Block"));
}

#[test]
fn register_username_bounds() {
    let short = RegisterForm { username: "ab".to_owned(), ..register_form() };
    assert_eq!(
        validate_register(&short).unwrap_err().get("username"),
        Some(&"Username must be at least 3 characters")
    );
    let long = RegisterForm { username: "a".repeat(21), ..register_form() };
    assert_eq!(
        validate_register(&long).unwrap_err().get("username"),
        Some(&"Username must not exceed 20 characters")
    );
    let edge = RegisterForm { username: "a".repeat(20), ..register_form() };
    assert!(validate_register(&edge).is_ok());
}

#[test]
fn register_rejects_malformed_email() {
    let form = RegisterForm { email: "steve.example.com".to_owned(), ..register_form() };
    assert_eq!(validate_register(&form).unwrap_err().get("email"), Some(&"Enter a valid email"));
}

#[test]
fn register_password_rules() {
    let short = RegisterForm {
        password: "short".to_owned(),
        confirm_password: "short".to_owned(),
        ..register_form()
    };
    assert_eq!(
        validate_register(&short).unwrap_err().get("password"),
        Some(&"Password must be at least 8 characters")
    );

    let mismatch = RegisterForm { confirm_password: "different1".to_owned(), ..register_form() };
    let errors = validate_register(&mismatch).unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some(&"Passwords must match"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn register_reports_every_invalid_field() {
    let errors = validate_register(&RegisterForm::default()).unwrap_err();
    let fields: Vec<&str> = errors.keys().copied().collect();
    assert_eq!(fields, vec!["confirm_password", "email", "password", "username"]);
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.co"));
}
