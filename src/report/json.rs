use crate::error::Result;
use crate::model::Repository;
use std::io::Write;

/// The full repository list, including quiet repositories and raw status text.
pub fn render<W: Write>(repos: &[Repository], pretty: bool, out: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, repos)?;
    } else {
        serde_json::to_writer(&mut *out, repos)?;
    }
    writeln!(out)?;
    Ok(())
}
