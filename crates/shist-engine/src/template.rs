//! Output templates.
//!
//! A template is resolved in two passes: color directives first, then the
//! remaining text is split into literal and placeholder segments. Entry
//! values are only ever inserted during rendering, so a command that happens
//! to contain `%C(red)` or `%d` is printed as-is.

use crate::color::resolve_directives;
use crate::date::DateFormat;
use shist_types::Entry;

pub const DEFAULT_TEMPLATE: &str = "%C(green)%d%C(reset) | %C(yellow)%i%C(reset) | %c";

/// Indentation for continuation lines of a multiline command.
const CONTINUATION_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Date,
    RawTimestamp,
    Index,
    Elapsed,
    Command,
}

impl Segment {
    fn placeholder(c: char) -> Option<Segment> {
        match c {
            'd' => Some(Segment::Date),
            't' => Some(Segment::RawTimestamp),
            'i' => Some(Segment::Index),
            'e' => Some(Segment::Elapsed),
            'c' => Some(Segment::Command),
            _ => None,
        }
    }
}

/// Rendering settings that do not depend on the template text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub date_format: DateFormat,
    /// Render multiline commands on one line (the default)
    pub concat_multiline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DateFormat::default(), true)
    }
}

impl RenderOptions {
    pub fn new(date_format: DateFormat, concat_multiline: bool) -> Self {
        Self {
            date_format,
            concat_multiline,
        }
    }
}

/// A color-resolved, pre-split output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Resolve directives (`color` off removes them) and split placeholders.
    ///
    /// `%d` date, `%t` raw timestamp, `%i` index, `%e` elapsed seconds,
    /// `%c` command. Any other `%` sequence is kept verbatim.
    pub fn parse(template: &str, color: bool) -> Self {
        let resolved = resolve_directives(template, color);

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = resolved.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '%'
                && let Some(segment) = chars.peek().copied().and_then(Segment::placeholder)
            {
                chars.next();
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
                continue;
            }
            literal.push(c);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Render one entry, terminated by a newline.
    pub fn render(&self, entry: &Entry, options: &RenderOptions) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Date => {
                    if let Some(ts) = entry.timestamp() {
                        out.push_str(&options.date_format.format(ts));
                    }
                }
                Segment::RawTimestamp => {
                    if let Some(ts) = entry.timestamp() {
                        out.push_str(&ts.to_string());
                    }
                }
                Segment::Index => out.push_str(&entry.index().to_string()),
                Segment::Elapsed => out.push_str(&entry.elapsed().to_string()),
                Segment::Command => {
                    if !options.concat_multiline && entry.is_multiline() {
                        out.push_str(&multiline_block(entry.lines()));
                    } else {
                        out.push_str(entry.command());
                    }
                }
            }
        }
        out.push('\n');
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE, false)
    }
}

/// Original line breaks, each line but the last ending in ` \`.
fn multiline_block(lines: &[String]) -> String {
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let trimmed = line.trim_end();
            let text = trimmed.strip_suffix('\\').unwrap_or(trimmed).trim();
            let mut rendered = if i == 0 {
                text.to_string()
            } else {
                format!("{CONTINUATION_INDENT}{text}")
            };
            if i < last {
                rendered.push_str(" \\");
            }
            rendered
        })
        .collect::<Vec<_>>()
        .join("\n")
}
