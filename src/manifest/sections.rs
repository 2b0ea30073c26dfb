//! Textual check for configuration section headers
//!
//! Presence means the literal `[section.name]` appears somewhere in the
//! manifest text. A header inside a comment or string also counts.

/// Bracketed header text for a section name
pub fn section_header(section: &str) -> String {
    format!("[{}]", section)
}

/// Sections whose header text does not appear in `content`, in input order
pub fn missing_sections<'a>(content: &str, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|section| !content.contains(&section_header(section)))
        .collect()
}
