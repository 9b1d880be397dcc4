//! Integration tests for loading style files from disk.

use std::fs;

use tempfile::TempDir;
use tfstyle::{Color, Dimension, Opacity, StyleCatalog, StyleError, StyleOverrides};

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_yaml_file_restyles_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "dark.yaml",
        r##"
# darker checkerboard for dark themes
checkerboardDarkGray: "#333333"
checkerboardLightGray: "#4D4D4D"
checkerboardCellSize: 8
histogramLineColor: [1.0, 1.0, 1.0, 1.0]
rangeIndicatorRectangleOpacity: 0.4
"##,
    );

    let overrides = StyleOverrides::from_path(&path).unwrap();
    let catalog = StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap();

    assert_eq!(catalog.checkerboard_dark_gray(), Color::rgb(0x33, 0x33, 0x33));
    assert_eq!(catalog.checkerboard_light_gray(), Color::rgb(0x4D, 0x4D, 0x4D));
    assert_eq!(catalog.checkerboard_cell_size(), Dimension::px(8));
    assert_eq!(catalog.histogram_line_color(), Color::WHITE);
    assert_eq!(
        catalog.range_indicator_rectangle_opacity(),
        Opacity::new(0.4).unwrap()
    );
    // Untouched entries keep their defaults.
    assert_eq!(
        catalog.controlpoints_circle_radius(),
        StyleCatalog::DEFAULT.controlpoints_circle_radius()
    );
}

#[test]
fn test_json_file_restyles_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "styles.json",
        r##"{ "controlpointsCircleLineWith": 2, "controlpointsLineColor": "#FF808080" }"##,
    );

    let overrides = StyleOverrides::from_path(&path).unwrap();
    let catalog = StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap();

    assert_eq!(catalog.controlpoints_circle_line_width(), Dimension::px(2));
    assert_eq!(catalog.controlpoints_line_color(), Color::GRAY);
}

#[test]
fn test_empty_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.yml", "");

    let overrides = StyleOverrides::from_path(&path).unwrap();
    assert_eq!(
        StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap(),
        StyleCatalog::DEFAULT
    );
}

#[test]
fn test_unknown_name_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "typo.yaml", "histogramLineWdth: 3\n");

    let overrides = StyleOverrides::from_path(&path).unwrap();
    let err = StyleCatalog::DEFAULT.with_overrides(&overrides).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnknownStyleKey {
            name: "histogramLineWdth".to_string()
        }
    );
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "styles.toml", "checkerboardCellSize = 4\n");

    assert!(matches!(
        StyleOverrides::from_path(&path),
        Err(StyleError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = StyleOverrides::from_path(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, StyleError::Io { .. }));
}

#[test]
fn test_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.yaml", "checkerboardCellSize: [1, 2\n");

    assert!(matches!(
        StyleOverrides::from_path(&path),
        Err(StyleError::Parse { .. })
    ));
}
