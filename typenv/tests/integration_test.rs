//! Integration tests against the process environment

use serial_test::serial;
use std::env;
use typenv::{EnvError, InvalidValueReason, PortBound, PortNumber};

#[test]
#[serial]
fn test_port_fallback_when_unset() {
    env::remove_var("PORT");

    let port = typenv::get_port("PORT", 8080).unwrap();
    assert_eq!(port, PortNumber::from(8080u16));
}

#[test]
#[serial]
fn test_require_port_out_of_range() {
    env::set_var("PORT", "70000");

    let result = typenv::require_port("PORT");
    assert!(matches!(
        result,
        Err(EnvError::InvalidPort {
            number: 70000,
            bound: PortBound::Max,
            ..
        })
    ));

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_get_bool_yes() {
    env::set_var("DEBUG", "yes");
    assert!(typenv::get_bool("DEBUG").unwrap());
    env::remove_var("DEBUG");
}

#[test]
#[serial]
fn test_get_bool_unset_is_false() {
    env::remove_var("DEBUG");
    assert!(!typenv::get_bool("DEBUG").unwrap());
}

#[test]
#[serial]
fn test_require_i64_not_a_number() {
    env::set_var("RETRIES", "abc");

    match typenv::require_i64("RETRIES") {
        Err(EnvError::InvalidValue {
            name,
            value,
            reason: InvalidValueReason::NotInteger(_),
        }) => {
            assert_eq!(name, "RETRIES");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidValue error, got {other:?}"),
    }

    env::remove_var("RETRIES");
}

#[test]
#[serial]
fn test_require_string_missing() {
    env::remove_var("NAME");

    let err = typenv::require_string("NAME").unwrap_err();
    assert!(matches!(&err, EnvError::Missing { name } if name == "NAME"));
    assert_eq!(err.name(), "NAME");
}

#[test]
#[serial]
fn test_string_present_and_empty() {
    env::set_var("NAME", "service");
    assert_eq!(typenv::get_string("NAME", "fallback"), "service");
    assert_eq!(typenv::require_string("NAME").unwrap(), "service");

    env::set_var("NAME", "");
    assert_eq!(typenv::get_string("NAME", "fallback"), "");
    assert_eq!(typenv::lookup("NAME").as_deref(), Some(""));

    env::remove_var("NAME");
    assert_eq!(typenv::get_string("NAME", "fallback"), "fallback");
    assert_eq!(typenv::lookup("NAME"), None);
}

#[test]
#[serial]
fn test_integers_round_trip() {
    env::set_var("TYPENV_I32", i32::MIN.to_string());
    env::set_var("TYPENV_I64", i64::MAX.to_string());

    assert_eq!(typenv::require_i32("TYPENV_I32").unwrap(), i32::MIN);
    assert_eq!(typenv::get_i32("TYPENV_I32", 0).unwrap(), i32::MIN);
    assert_eq!(typenv::require_i64("TYPENV_I64").unwrap(), i64::MAX);
    assert_eq!(typenv::get_i64("TYPENV_I64", 0).unwrap(), i64::MAX);

    env::remove_var("TYPENV_I32");
    env::remove_var("TYPENV_I64");

    assert_eq!(typenv::get_i32("TYPENV_I32", 5).unwrap(), 5);
    assert_eq!(typenv::get_i64("TYPENV_I64", -5).unwrap(), -5);
}

#[test]
#[serial]
fn test_require_bool_missing_and_invalid() {
    env::remove_var("TYPENV_FLAG");
    assert!(matches!(
        typenv::require_bool("TYPENV_FLAG"),
        Err(EnvError::Missing { .. })
    ));

    env::set_var("TYPENV_FLAG", "True");
    let err = typenv::require_bool("TYPENV_FLAG").unwrap_err();
    assert!(err.to_string().contains("true, 1, on, yes, false, 0, off"));

    env::set_var("TYPENV_FLAG", "off");
    assert!(!typenv::require_bool("TYPENV_FLAG").unwrap());

    env::remove_var("TYPENV_FLAG");
}

#[test]
#[serial]
fn test_port_boundaries() {
    let cases = [
        ("0", Some(0u16)),
        ("65535", Some(65535)),
        ("-1", None),
        ("65536", None),
    ];
    for (value, expected) in cases {
        env::set_var("TYPENV_PORT", value);
        let result = typenv::require_port("TYPENV_PORT");
        match expected {
            Some(port) => assert_eq!(result.unwrap().get(), port),
            None => assert!(matches!(result, Err(EnvError::InvalidPort { .. }))),
        }
    }

    env::remove_var("TYPENV_PORT");
    assert!(matches!(
        typenv::get_port("TYPENV_PORT", 65536),
        Err(EnvError::InvalidPort { .. })
    ));
}

#[test]
#[serial]
fn test_error_propagates_through_anyhow() {
    fn load() -> anyhow::Result<PortNumber> {
        Ok(typenv::require_port("TYPENV_MISSING_PORT")?)
    }

    env::remove_var("TYPENV_MISSING_PORT");
    let err = load().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Environment variable 'TYPENV_MISSING_PORT' is required but not set"
    );
    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::Missing { .. })
    ));
}
