//! Integration tests for the process-wide catalog.
//!
//! The catalog can be frozen only once per process, so everything that
//! touches it lives in a single test in its own binary.

use std::thread;

use tfstyle::{Dimension, StyleCatalog, StyleError, StyleOverrides};

#[test]
fn test_install_freezes_once_and_is_shared() {
    assert!(!tfstyle::is_initialized());

    let overrides = StyleOverrides::from_yaml_str("rangeIndicatorCircleRadius: 24").unwrap();
    let custom = StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap();
    let installed = tfstyle::install(custom.clone()).unwrap();
    assert!(tfstyle::is_initialized());
    assert_eq!(installed, &custom);

    // A second install is rejected and the frozen catalog is unchanged.
    assert_eq!(
        tfstyle::install(StyleCatalog::DEFAULT),
        Err(StyleError::ImmutableStateViolation)
    );
    assert_eq!(
        tfstyle::global().range_indicator_circle_radius(),
        Dimension::px(24)
    );

    // Concurrent readers all see the same instance.
    let readers: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| tfstyle::global() as *const StyleCatalog as usize))
        .collect();
    let expected = tfstyle::global() as *const StyleCatalog as usize;
    for reader in readers {
        assert_eq!(reader.join().unwrap(), expected);
    }
}
