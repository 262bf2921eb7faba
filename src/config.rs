//! Configuration loading and parsing for `image-release.toml` files.
//!
//! Every key is optional. A repository without a configuration file gets
//! the layout the hub and notebook images have always used.
use log::*;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{ReleaseError, Result},
    image::ImageType,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "image-release.toml";

/// Placeholder replaced by the image name in path templates.
pub const IMAGE_PLACEHOLDER: &str = "{image}";

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_VERSION_FILE: &str = "jupyterhub/{image}/VERSION";
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.{image}.md";

/// Root configuration structure for `image-release.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Git remote release tags are pushed to.
    pub remote: String,
    /// Version file path template, relative to the repository root.
    pub version_file: String,
    /// Changelog file path template, relative to the repository root.
    pub changelog_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.into(),
            version_file: DEFAULT_VERSION_FILE.into(),
            changelog_file: DEFAULT_CHANGELOG_FILE.into(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("configuration not found: using default");
                return Ok(Self::default());
            }
            Err(err) => return Err(ReleaseError::io("read", path, err)),
        };

        debug!("loading configuration from {}", path.display());

        toml::from_str(&content).map_err(|source| {
            ReleaseError::InvalidConfig {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Version file for `image`, resolved against `root`.
    pub fn version_path(&self, root: &Path, image: ImageType) -> PathBuf {
        root.join(render(&self.version_file, image))
    }

    /// Changelog file for `image`, resolved against `root`.
    pub fn changelog_path(&self, root: &Path, image: ImageType) -> PathBuf {
        root.join(render(&self.changelog_file, image))
    }
}

fn render(template: &str, image: ImageType) -> String {
    template.replace(IMAGE_PLACEHOLDER, image.as_str())
}
