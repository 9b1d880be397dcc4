//! The process-wide catalog falls back to the defaults when nothing is installed.

use std::thread;

use tfstyle::{StyleCatalog, StyleError};

#[test]
fn test_first_read_freezes_defaults() {
    let readers: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| tfstyle::global().clone()))
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), StyleCatalog::DEFAULT);
    }

    assert!(tfstyle::is_initialized());
    assert_eq!(
        tfstyle::install(StyleCatalog::DEFAULT),
        Err(StyleError::ImmutableStateViolation)
    );
}
