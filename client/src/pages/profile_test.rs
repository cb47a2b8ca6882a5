use super::*;

#[test]
fn profile_rows_list_present_fields_in_order() {
    let principal = Principal::new("u1").with_email("a@b.com").with_display_name("Ada");
    assert_eq!(
        profile_rows(&principal),
        vec![("Name", "Ada".to_owned()), ("Email", "a@b.com".to_owned()), ("User ID", "u1".to_owned())]
    );
}

#[test]
fn profile_rows_skip_missing_and_blank_fields() {
    let principal = Principal::new("u1").with_display_name("  ");
    assert_eq!(profile_rows(&principal), vec![("User ID", "u1".to_owned())]);
}
