//! The process-wide catalog.

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::catalog::StyleCatalog;
use crate::style::StyleError;

static GLOBAL: OnceCell<StyleCatalog> = OnceCell::new();

/// Freezes `catalog` as the process-wide catalog.
///
/// Succeeds at most once per process. Any later call, including one made
/// after [`global`] has already frozen the default, fails with
/// [`StyleError::ImmutableStateViolation`].
///
/// # Example
///
/// ```rust
/// use tfstyle::{StyleCatalog, StyleOverrides};
///
/// let overrides = StyleOverrides::from_yaml_str("checkerboardCellSize: 16").unwrap();
/// let catalog = StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap();
///
/// let styles = tfstyle::install(catalog).unwrap();
/// assert_eq!(styles.checkerboard_cell_size().get(), 16.0);
/// assert!(tfstyle::install(StyleCatalog::DEFAULT).is_err());
/// ```
pub fn install(catalog: StyleCatalog) -> Result<&'static StyleCatalog, StyleError> {
    match GLOBAL.set(catalog) {
        Ok(()) => {
            debug!("installed process-wide style catalog");
            Ok(global())
        }
        Err(_) => {
            warn!("style catalog is already initialized; ignoring install");
            Err(StyleError::ImmutableStateViolation)
        }
    }
}

/// Returns the process-wide catalog, freezing [`StyleCatalog::DEFAULT`] on
/// first access if nothing was installed.
pub fn global() -> &'static StyleCatalog {
    GLOBAL.get_or_init(|| {
        debug!("no style catalog installed; using defaults");
        StyleCatalog::DEFAULT
    })
}

/// Whether the process-wide catalog has been frozen yet.
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}
