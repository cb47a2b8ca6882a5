use super::*;

#[test]
fn validate_sign_in_trims_and_derives_uid() {
    let principal = validate_sign_in("  Ada@Example.com ", "  Ada Lovelace ").expect("valid");

    assert_eq!(principal.uid, "local:ada@example.com");
    assert_eq!(principal.email.as_deref(), Some("Ada@Example.com"));
    assert_eq!(principal.display_name.as_deref(), Some("Ada Lovelace"));
}

#[test]
fn validate_sign_in_display_name_is_optional() {
    let principal = validate_sign_in("a@b.com", "   ").expect("valid");

    assert_eq!(principal.display_name, None);
    assert_eq!(principal.label(), "a@b.com");
}

#[test]
fn validate_sign_in_requires_email() {
    assert_eq!(validate_sign_in("   ", "Ada"), Err("Enter an email first."));
}

#[test]
fn validate_sign_in_rejects_malformed_email() {
    for raw in ["ada", "@b.com", "ada@", "a@b@c"] {
        assert_eq!(validate_sign_in(raw, ""), Err("Enter a valid email address."), "{raw}");
    }
}

#[test]
fn sign_in_form_offered_only_when_resolved_signed_out_and_configured() {
    assert!(sign_in_available(&SessionStatus::Unauthenticated, true));
    assert!(sign_in_available(&SessionStatus::Failed("session did not resolve within 10s".to_owned()), true));
    assert!(!sign_in_available(&SessionStatus::Pending, true));
    assert!(!sign_in_available(&SessionStatus::Authenticated(Principal::new("u1")), true));
}

#[test]
fn sign_in_form_withheld_when_provider_misconfigured() {
    let misconfigured = SessionStatus::Failed("identity provider misconfigured: missing config value: apiKey".to_owned());
    assert!(!sign_in_available(&misconfigured, false));
    assert!(!sign_in_available(&SessionStatus::Unauthenticated, false));
}
