//! Settings command

use crate::output::write_settings;
use crate::player::{PlayerStore, Session};
use anyhow::{Context, Result};
use std::io::Write;

/// Requested changes; `None` leaves a setting alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub high_contrast: Option<bool>,
    pub hard_mode: Option<bool>,
}

impl SettingsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.high_contrast.is_none() && self.hard_mode.is_none()
    }
}

/// Apply `update`, persist each change, then print the current settings
///
/// # Errors
///
/// Returns an error if a changed setting could not be saved or output fails.
pub fn run_settings<S: PlayerStore, W: Write>(
    session: &mut Session<S>,
    update: SettingsUpdate,
    out: &mut W,
) -> Result<()> {
    if update.is_empty() {
        log::debug!("no settings changes requested");
    }
    if let Some(enabled) = update.high_contrast {
        session
            .set_high_contrast(enabled)
            .context("high contrast was changed but could not be saved")?;
    }
    if let Some(enabled) = update.hard_mode {
        session
            .set_hard_mode(enabled)
            .context("hard mode was changed but could not be saved")?;
    }

    write_settings(out, &session.record().settings)?;
    Ok(())
}
