//! Terminal color capability.
//!
//! The engine only sees one boolean; everything that decides it lives here.

use is_terminal::IsTerminal;

/// Whether stdout can take ANSI color escapes right now
pub fn color_supported() -> bool {
    let no_color = std::env::var("NO_COLOR").ok();
    color_allowed(
        no_color.as_deref(),
        std::io::stdout().is_terminal(),
        platform_supports_ansi(),
    )
}

/// `NO_COLOR` only counts when it is non-empty.
pub(crate) fn color_allowed(no_color: Option<&str>, is_tty: bool, ansi: bool) -> bool {
    no_color.is_none_or(str::is_empty) && is_tty && ansi
}

#[cfg(not(windows))]
fn platform_supports_ansi() -> bool {
    true
}

#[cfg(windows)]
fn platform_supports_ansi() -> bool {
    windows_console_supports_ansi(|key| std::env::var(key).ok())
}

/// Known ANSI-capable Windows hosts, identified by their environment.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn windows_console_supports_ansi(var: impl Fn(&str) -> Option<String>) -> bool {
    var("WT_SESSION").is_some()
        || var("ANSICON").is_some()
        || var("ConEmuANSI").is_some_and(|v| v == "ON")
        || var("TERM_PROGRAM").is_some_and(|v| v.to_ascii_lowercase().contains("vscode"))
}
