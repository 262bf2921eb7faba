//! Release pipeline for a single image: bump the version file, record the
//! changelog entry, commit, then tag and push.
use chrono::{Local, NaiveDate};
use log::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    changelog,
    config::Config,
    error::{ReleaseError, Result},
    git::{BestEffort, VersionControl},
    image::ImageType,
    version::{BumpType, INITIAL_VERSION, Version},
};

/// Everything that happened during one release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub image: ImageType,
    pub version: Version,
    pub tag: String,
    pub changelog_updated: bool,
    pub staged: BestEffort,
    pub committed: BestEffort,
    pub tag_created: BestEffort,
    pub tag_pushed: BestEffort,
}

impl ReleaseReport {
    /// Confirmation line printed once the pipeline finishes.
    pub fn summary(&self) -> String {
        format!("Released {} v{}", self.image, self.version)
    }
}

/// Manages version, changelog and tags for one image in a repository.
pub struct ReleaseManager<V: VersionControl> {
    image: ImageType,
    remote: String,
    version_file: PathBuf,
    changelog_file: PathBuf,
    vcs: V,
}

impl<V: VersionControl> ReleaseManager<V> {
    /// Resolve the image's files against `root` using `config`.
    pub fn new(
        root: &Path,
        image: ImageType,
        config: &Config,
        vcs: V,
    ) -> Self {
        Self {
            image,
            remote: config.remote.clone(),
            version_file: config.version_path(root, image),
            changelog_file: config.changelog_path(root, image),
            vcs,
        }
    }

    /// Resolved path of the image's version file.
    pub fn version_file(&self) -> &Path {
        &self.version_file
    }

    /// Resolved path of the image's changelog file.
    pub fn changelog_file(&self) -> &Path {
        &self.changelog_file
    }

    /// Tag name for a released version, e.g. `hub-v1.2.3`.
    pub fn tag_name(&self, version: &Version) -> String {
        format!("{}-v{version}", self.image)
    }

    /// Commit message for a release, e.g. `chore(release): hub v1.2.3`.
    pub fn commit_message(&self, version: &Version) -> String {
        format!("chore(release): {} v{version}", self.image)
    }

    /// Read the image's current version. A missing version file means the
    /// image has never been released.
    pub fn get_current_version(&self) -> Result<Version> {
        match read_optional(&self.version_file)? {
            Some(content) => content.parse(),
            None => {
                debug!(
                    "{} not found: assuming {INITIAL_VERSION}",
                    self.version_file.display()
                );
                Ok(INITIAL_VERSION)
            }
        }
    }

    /// Compute the next version and overwrite the version file with it.
    pub fn bump_version(&self, bump_type: BumpType) -> Result<Version> {
        let current = self.get_current_version()?;
        let next = current.bump(bump_type)?;

        info!("bumping {} {bump_type}: {current} -> {next}", self.image);

        write_file(&self.version_file, &next.to_string())?;

        Ok(next)
    }

    /// Add a section for `version` dated today.
    pub fn update_changelog(
        &self,
        version: &Version,
        changes: &str,
    ) -> Result<()> {
        self.update_changelog_on(version, changes, Local::now().date_naive())
    }

    /// Add a section for `version` with an explicit release date.
    pub fn update_changelog_on(
        &self,
        version: &Version,
        changes: &str,
        date: NaiveDate,
    ) -> Result<()> {
        info!("updating {}", self.changelog_file.display());

        let current = read_optional(&self.changelog_file)?
            .unwrap_or_else(|| changelog::DEFAULT_HEADER.to_string());

        let entry =
            changelog::render_entry(self.image, version, date, changes);
        let updated = changelog::insert_entry(&current, &entry);

        write_file(&self.changelog_file, &updated)
    }

    /// Stage the version file, and the changelog when one exists, then
    /// commit them.
    pub fn commit_release(
        &self,
        version: &Version,
    ) -> (BestEffort, BestEffort) {
        let mut paths = vec![self.version_file.clone()];
        if self.changelog_file.exists() {
            paths.push(self.changelog_file.clone());
        }
        let staged = BestEffort::from_result("stage", self.vcs.stage(&paths));

        let message = self.commit_message(version);
        let committed =
            BestEffort::from_result("commit", self.vcs.commit(&message));

        (staged, committed)
    }

    /// Create the release tag and push it to the configured remote.
    pub fn create_git_tag(
        &self,
        version: &Version,
    ) -> (BestEffort, BestEffort) {
        let tag = self.tag_name(version);

        let created = BestEffort::from_result(
            "tag creation",
            self.vcs.create_tag(&tag),
        );
        let pushed = BestEffort::from_result(
            "tag push",
            self.vcs.push_tag(&self.remote, &tag),
        );

        (created, pushed)
    }

    /// Run the full release. Only version and changelog file problems are
    /// returned as errors; git failures are reported in the result.
    pub fn release(
        &self,
        bump_type: BumpType,
        changes: Option<&str>,
    ) -> Result<ReleaseReport> {
        let version = self.bump_version(bump_type)?;

        let changes = changes.filter(|c| !c.is_empty());
        if let Some(changes) = changes {
            self.update_changelog(&version, changes)?;
        } else {
            debug!("no changes provided: skipping changelog");
        }

        let (staged, committed) = self.commit_release(&version);
        let (tag_created, tag_pushed) = self.create_git_tag(&version);

        Ok(ReleaseReport {
            image: self.image,
            tag: self.tag_name(&version),
            version,
            changelog_updated: changes.is_some(),
            staged,
            committed,
            tag_created,
            tag_pushed,
        })
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ReleaseError::io("read", path, err)),
    }
}

/// Overwrite `path` with `content`, creating missing parent directories.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|err| ReleaseError::io("create", parent, err))?;
    }

    fs::write(path, content)
        .map_err(|err| ReleaseError::io("write", path, err))
}

#[cfg(test)]
#[path = "./release_tests.rs"]
mod tests;
