// crates/shared-kernel/tests/error_context.rs
use std::io;

use country_stats_shared_kernel::{CountryStatsError, DomainError, ErrorContext, PresentationError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CountryStatsError::from)
        .context("reading countries")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading countries"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let result: std::result::Result<(), DomainError> =
        Err(DomainError::UnknownRegion { value: "Atlantis".to_string() });
    let err = result.with_context(|| format!("record #{}", 3)).unwrap_err();

    assert_eq!(err.to_string(), "record #3: Domain error: Unknown region 'Atlantis'");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn layer_errors_render_through_root() {
    let overflow = CountryStatsError::from(DomainError::Overflow { query: "total_area".to_string() });
    assert_eq!(overflow.to_string(), "Domain error: Query 'total_area' overflowed its numeric range");

    let config = CountryStatsError::from(PresentationError::ConfigBuildFailed("code missing".to_string()));
    assert_eq!(config.to_string(), "Presentation error: Configuration building failed: code missing");
}
