//! Dependency declaration parsing for Python manifests
//!
//! Declarations follow PEP 508: a distribution name optionally followed by
//! extras, a version specifier, an environment marker, or a direct
//! `name @ url` source reference.

mod python;

pub use python::{is_direct_reference, parse_package_name, DIRECT_REFERENCE_MARKER};
