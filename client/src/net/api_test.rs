use super::*;

#[test]
fn authorization_uses_bearer_scheme() {
    let backend = HttpProductBackend::new(Some("abc.def".to_owned()));
    assert_eq!(backend.authorization().as_deref(), Some("Bearer abc.def"));
}

#[test]
fn no_token_sends_no_authorization() {
    assert_eq!(HttpProductBackend::default().authorization(), None);
}

#[test]
fn transport_error_is_network_with_unreachable_user_message() {
    let err = transport_error("TypeError: Failed to fetch");
    assert_eq!(err, BackendError::Network("TypeError: Failed to fetch".to_owned()));
    assert_eq!(err.user_message(), catalog::backend::UNREACHABLE_MESSAGE);
}
