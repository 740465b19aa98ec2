use super::*;

#[test]
fn missing_setting_uses_local_backend() {
    assert_eq!(resolve_base_url(None), "http://localhost:8080");
}

#[test]
fn configured_url_drops_trailing_slash() {
    assert_eq!(resolve_base_url(Some("https://school.example/")), "https://school.example");
}

#[test]
fn blank_setting_uses_local_backend() {
    assert_eq!(resolve_base_url(Some("")), "http://localhost:8080");
}
