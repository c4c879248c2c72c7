use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::Entry;

/// Single flush at end of run: the whole collection as one indented
/// JSON array, UTF-8, Cyrillic kept as-is. Absent fields become null.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, entries)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

// ── Tests ──
