//! Release command: wires CLI arguments, configuration and system git into
//! a [`ReleaseManager`] run.
use log::*;

use crate::{
    cli::Args,
    config::Config,
    error::Result,
    git::SystemGit,
    release::{ReleaseManager, ReleaseReport},
};

/// Execute a release for the image selected in `args`.
pub fn execute(args: &Args) -> Result<ReleaseReport> {
    let config = Config::load(&args.config_path())?;

    let vcs = SystemGit::new(&args.root);
    let manager =
        ReleaseManager::new(&args.root, args.image_type, &config, vcs);

    let report = manager.release(args.bump, args.changes.as_deref())?;

    debug!(
        "release {}: stage {}, commit {}, tag {}, push {}",
        report.tag,
        report.staged,
        report.committed,
        report.tag_created,
        report.tag_pushed
    );

    Ok(report)
}
