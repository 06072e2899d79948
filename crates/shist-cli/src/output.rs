use anyhow::Result;
use shist_engine::{RenderOptions, Template};
use shist_types::Entry;
use std::io::Write;

pub fn write_plain<W: Write>(
    out: &mut W,
    entries: &[Entry],
    template: &Template,
    options: &RenderOptions,
) -> Result<()> {
    for entry in entries {
        out.write_all(template.render(entry, options).as_bytes())?;
    }
    Ok(())
}

/// One JSON object per line
pub fn write_json<W: Write>(out: &mut W, entries: &[Entry]) -> Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
