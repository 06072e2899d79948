use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every line of a history file.
///
/// Lines are split on `\n` with a trailing `\r` removed. Bytes that are not
/// valid UTF-8 are replaced rather than failing the read, since history files
/// routinely contain pasted binary or legacy-encoded text.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk.map_err(|e| Error::io(path, e))?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "read history file");
    Ok(lines)
}
