//! Statistics command

use crate::output::write_stats;
use crate::player::PlayerRecord;
use anyhow::Result;
use std::io::Write;

/// Print lifetime statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_stats<W: Write>(record: &PlayerRecord, out: &mut W) -> Result<()> {
    write_stats(out, record)?;
    Ok(())
}
