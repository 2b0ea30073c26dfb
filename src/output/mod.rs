//! Output formatting for both tools
//!
//! Everything user-facing is a human-readable status line; there is no
//! machine-readable format.

mod text;

use std::io::IsTerminal;

pub use text::{truncate_reason, TextReporter, MAX_REASON_LEN};

/// Color only a terminal stdout, unless disabled by flag or `NO_COLOR`
pub fn use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
