//! Resolved settings command

use std::path::Path;

use anyhow::Result;
use proconfig_settings::resolve;

use crate::commands::load_profile;
use crate::output;

/// Execute show command
pub fn execute(record: &Path, json: bool) -> Result<()> {
    let profile = load_profile(record)?;
    let resolved = resolve(&profile.settings);
    output::print_resolved(&profile, &resolved, json)
}
