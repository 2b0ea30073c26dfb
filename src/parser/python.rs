//! Package name extraction from PEP 508 dependency declarations
//!
//! Handles declaration formats:
//! - Bare name: `requests`
//! - Version specifier: `requests>=2.0`, `pkg-two==1.0`, `foo~=1.4`
//! - Extras: `uvicorn[standard]>=0.20`
//! - Environment marker: `tomli; python_version < "3.11"`
//! - Direct reference: `pkg @ git+https://...` (skipped)

use regex::Regex;
use std::sync::LazyLock;

/// Separator between a name and a direct URL/path source
pub const DIRECT_REFERENCE_MARKER: &str = " @ ";

// One alphanumeric, then any of [A-Za-z0-9._-], ending in an alphanumeric
static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9._-]*[a-zA-Z0-9])?").unwrap());

/// Returns true if the declaration installs from a URL or path rather than by name
pub fn is_direct_reference(declaration: &str) -> bool {
    declaration.contains(DIRECT_REFERENCE_MARKER)
}

/// Extract the bare package name from a dependency declaration.
///
/// Returns `None` for direct references (which cannot be upgraded by name)
/// and for declarations that do not start with a valid distribution name.
pub fn parse_package_name(declaration: &str) -> Option<&str> {
    let trimmed = declaration.trim();
    if is_direct_reference(trimmed) {
        return None;
    }
    PACKAGE_NAME_RE.find(trimmed).map(|m| m.as_str())
}
