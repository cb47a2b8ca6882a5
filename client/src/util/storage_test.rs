#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_json_is_none_outside_browser() {
    assert_eq!(load_json::<String>("fyp:test"), None);
}

#[test]
fn save_and_remove_are_callable_outside_browser() {
    save_json("fyp:test", &"value");
    remove("fyp:test");
    assert_eq!(load_json::<String>("fyp:test"), None);
}
