//! 오류 메시지 체인 테스트.
use rankine_cycle::app::{self, AppError};
use rankine_cycle::config;
use rankine_cycle::cycle::{CycleError, CycleStep, StatePoint};
use rankine_cycle::steam::PropertyError;

#[test]
fn each_cause_is_reported_once() {
    let source = PropertyError::QualityOutOfRange { quality: 1.5 };
    let err = AppError::from(CycleError::PropertyLookupFailure {
        step: CycleStep::State(StatePoint::Four),
        source: source.clone(),
    });
    let chain = app::error_chain(&err);
    assert_eq!(
        chain,
        vec![
            "cycle evaluation failed".to_string(),
            "could not compute state 4".to_string(),
            source.to_string(),
        ]
    );
    let joined = chain.join("\n");
    assert_eq!(joined.matches("state 4").count(), 1, "{joined}");
    assert_eq!(joined.matches(&source.to_string()).count(), 1, "{joined}");
}

#[test]
fn missing_config_file_chain_ends_with_io_error() {
    let err = config::load(Some(std::path::Path::new("does/not/exist.toml"))).unwrap_err();
    let err = AppError::from(err);
    let chain = app::error_chain(&err);
    assert_eq!(chain.len(), 3, "{chain:?}");
    assert_eq!(chain[0], "configuration error");
    assert!(chain[1].contains("does/not/exist.toml"));
    assert!(!chain[1].contains(&chain[2]), "{chain:?}");
}
