//! Shared test utilities for the kites-site test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = shipped_site();
//! let html = render(&site, "/ar/partners/ansys/");
//! assert_html_dir(&html, "rtl");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::generate;
use crate::routes;
use crate::site::Site;

// =========================================================================
// Fixture setup
// =========================================================================

/// Path of the `content/` directory shipped with the crate.
pub fn shipped_content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

/// Load the shipped content. Panics if it fails to load.
pub fn shipped_site() -> Site {
    Site::load(&shipped_content_dir()).unwrap_or_else(|e| panic!("shipped content: {e}"))
}

/// Copy `content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate (delete a bundle, break a
/// fixture) without affecting other tests or the source content.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    generate::copy_dir(&shipped_content_dir(), tmp.path()).unwrap();
    tmp
}

// =========================================================================
// Rendering shortcuts
// =========================================================================

/// Render a path the way the `render` command does. Panics on a bad
/// language prefix.
pub fn render(site: &Site, path: &str) -> String {
    let (language, route) = routes::parse_path(path);
    let language = language.unwrap_or_else(|| panic!("path '{path}' has no language prefix"));
    generate::render_route(site, language, route.as_ref()).into_string()
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Assert the document's `<html dir>` attribute.
pub fn assert_html_dir(html: &str, dir: &str) {
    let needle = format!(r#"dir="{dir}""#);
    assert!(
        html.contains(&needle),
        "expected {needle} on <html>, got: {}",
        html.chars().take(200).collect::<String>()
    );
}

/// Assert every needle appears in the HTML.
pub fn assert_contains_all(html: &str, needles: &[&str]) {
    for needle in needles {
        assert!(html.contains(needle), "missing '{needle}' in rendered HTML");
    }
}
