use std::error::Error as _;
use std::path::PathBuf;

use wordfreq_shared_kernel::{ErrorContext, InfrastructureError, Result, WordFreqError};

fn failing_read() -> Result<()> {
    Err(InfrastructureError::InputNotFound { path: PathBuf::from("/missing/corpus") }.into())
}

#[test]
fn context_wraps_and_keeps_source() {
    let err = failing_read().context("expanding input").unwrap_err();
    assert!(err.to_string().starts_with("expanding input: "));
    let source = err.source().expect("source preserved");
    assert!(source.to_string().contains("/missing/corpus"));
}

#[test]
fn with_context_is_lazy() {
    let ok: Result<u32> = Ok(7);
    let value = ok.with_context(|| unreachable!("not evaluated on Ok")).unwrap();
    assert_eq!(value, 7);
}

#[test]
fn layer_errors_convert_into_root() {
    let err: WordFreqError =
        InfrastructureError::WorkerPool { details: "no threads".into() }.into();
    assert!(matches!(err, WordFreqError::Infrastructure(_)));
}
