// Engine - selection and rendering of history entries
// Sits between the readers (providers) and CLI presentation

pub mod color;
pub mod date;
pub mod error;
pub mod filter;
pub mod template;

pub use date::{DEFAULT_DATE_LAYOUT, DateFormat, Timezone, parse_date_bound};
pub use error::{Error, Result};
pub use filter::{Selection, SelectionArgs};
pub use template::{DEFAULT_TEMPLATE, RenderOptions, Template};

use shist_types::Entry;

// Façade API - stable interface for the CLI layer

/// Filter an oldest-first entry sequence
pub fn select(entries: Vec<Entry>, selection: &Selection) -> Vec<Entry> {
    selection.apply(entries)
}

/// Render a single entry through `template`, newline-terminated
///
/// Callers rendering many entries should parse the [`Template`] once instead.
pub fn render(
    entry: &Entry,
    date_format: &DateFormat,
    template: &str,
    concat_multiline: bool,
    color: bool,
) -> String {
    let options = RenderOptions::new(date_format.clone(), concat_multiline);
    Template::parse(template, color).render(entry, &options)
}
