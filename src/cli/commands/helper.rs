use anyhow::{Context, Result};
use log::info;

use crate::{cli::args::CommonArgs, config::CONFIG_FILE_NAME, session::Workspace};

/// Open the working tree named by `--path`.
pub fn open_workspace(common: &CommonArgs) -> Result<Workspace> {
    let workspace = Workspace::open(&common.path)
        .with_context(|| format!("Failed to open {}", common.path.display()))?;

    if !workspace.config_from_file {
        info!("No {} found, using default configuration", CONFIG_FILE_NAME);
    }

    Ok(workspace)
}
