use super::*;

#[test]
fn greeting_prefers_display_name() {
    let principal = Principal::new("u1").with_email("a@b.com").with_display_name("Dr. Rahman");
    assert_eq!(greeting(&principal), "Welcome back, Dr. Rahman");
}

#[test]
fn greeting_falls_back_to_email_then_uid() {
    assert_eq!(greeting(&Principal::new("u1").with_email("a@b.com")), "Welcome back, a@b.com");
    assert_eq!(greeting(&Principal::new("u1")), "Welcome back, u1");
}
