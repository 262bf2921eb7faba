//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{config::DEFAULT_CONFIG_FILE, image::ImageType, version::BumpType};

/// Manage hub and notebook image releases: bump the version, record a
/// changelog entry, commit and tag.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Image to release.
    #[arg(value_enum)]
    pub image_type: ImageType,

    #[arg(long, value_enum, default_value_t = BumpType::Patch)]
    /// Version component to bump.
    pub bump: BumpType,

    #[arg(long)]
    /// Changelog entry content. The changelog is left untouched if omitted.
    pub changes: Option<String>,

    #[arg(long, default_value = ".")]
    /// Repository root containing the version and changelog files.
    pub root: PathBuf,

    #[arg(long)]
    /// Configuration file. Defaults to image-release.toml in the root.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configuration file path, resolved against the repository root.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_CONFIG_FILE))
    }
}
