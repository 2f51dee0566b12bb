use versor::{Domain, RotationDefect, RotationError};

#[test]
fn test_invalid_input_message_names_parameter_and_domain() {
    let err = RotationError::invalid_input("phi", 9.5, Domain::HalfTurn);
    assert_eq!(err.to_string(), "invalid input: phi = 9.5 must be in [0, π]");
    assert!(err.is_invalid_input());
    assert!(!err.is_invalid_rotation());
}

#[test]
fn test_unit_norm_domain_shows_tolerance() {
    let err = RotationError::invalid_input("axis", 2.0, Domain::UnitNorm);
    assert!(err.to_string().contains("unit norm (±1e-5)"));
}

#[test]
fn test_invalid_rotation_message_names_failed_check() {
    let err: RotationError = RotationDefect::Determinant { determinant: -1.0 }.into();
    assert_eq!(
        err.to_string(),
        "invalid rotation: matrix determinant is -1, expected 1"
    );

    let err: RotationError = RotationDefect::NotOrthogonal { deviation: 3.0 }.into();
    assert!(err.to_string().contains("not orthogonal"));
    assert!(err.is_invalid_rotation());
}

#[test]
fn test_send_sync() {
    fn _assert_send<T: Send>() {}
    fn _assert_sync<T: Sync>() {}
    _assert_send::<RotationError>();
    _assert_sync::<RotationError>();
}
