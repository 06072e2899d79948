//! Inline color directives: `%C(green)`, `%C(#ff00aa)`, `%C(reset)`.

use owo_colors::{AnsiColors, DynColor, Rgb};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%C\(([^)]+)\)").unwrap());

pub const RESET: &str = "\x1b[0m";

/// Foreground escape for any owo-colors color.
struct Foreground<C>(C);

impl<C: DynColor> fmt::Display for Foreground<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_ansi_fg(f)
    }
}

fn named_color(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        _ => return None,
    };
    Some(color)
}

fn hex_color(spec: &str) -> Option<Rgb> {
    let hex = spec.strip_prefix('#').unwrap_or(spec);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Escape sequence for one directive spec, or `None` when unrecognized.
pub fn directive_code(spec: &str) -> Option<String> {
    let spec = spec.trim().to_ascii_lowercase();
    if spec == "reset" {
        return Some(RESET.to_string());
    }
    if let Some(color) = named_color(&spec) {
        return Some(Foreground(color).to_string());
    }
    hex_color(&spec).map(|rgb| Foreground(rgb).to_string())
}

/// Replace every directive in `template`.
///
/// With color disabled every directive is removed. Unrecognized specs always
/// resolve to nothing.
pub fn resolve_directives(template: &str, enabled: bool) -> Cow<'_, str> {
    DIRECTIVE_REGEX.replace_all(template, |caps: &Captures| {
        if enabled {
            directive_code(&caps[1]).unwrap_or_default()
        } else {
            String::new()
        }
    })
}
