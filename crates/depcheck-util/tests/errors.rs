use depcheck_util::errors::DepcheckError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = DepcheckError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_graph_error_display() {
    let err = DepcheckError::Graph {
        message: "unexpected end of input".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Dependency graph error: unexpected end of input"
    );
}

#[test]
fn test_config_error_display() {
    let err = DepcheckError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad syntax");
}

#[test]
fn test_policy_error_display() {
    let err = DepcheckError::Policy {
        message: "2 snapshot dependencies found".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Policy violation: 2 snapshot dependencies found"
    );
}

#[test]
fn test_generic_error_display() {
    let err = DepcheckError::Generic {
        message: "something else".to_string(),
    };
    assert_eq!(err.to_string(), "something else");
}
