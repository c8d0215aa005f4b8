//! Recursive copy of the loader resources into a target directory

use exlaunch_core::{ExlaunchError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Name of the resource directory shipped with this crate
const RESOURCE_DIR: &str = "deploy";

/// Version stamp shipped next to the loader binaries, holding the remote API version
pub const VERSION_FILE: &str = "exlaunch-version";

/// Location of the bundled loader resources
pub fn bundled_resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR)
}

/// Copy the bundled loader resources into `exefs_path`.
///
/// Creates `exefs_path` and any missing parents. Existing files are
/// overwritten; files only present in the destination are left alone.
pub async fn include_depackager(exefs_path: impl AsRef<Path>) -> Result<DeployReport> {
    Deployer::bundled().deploy(exefs_path).await
}

/// Summary of one deployment
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Files written to the destination
    pub files_copied: usize,
    /// Directories that did not exist before, missing parents included
    pub dirs_created: usize,
}

/// Copies a resource tree into destination directories
#[derive(Debug, Clone)]
pub struct Deployer {
    source: PathBuf,
}

impl Deployer {
    /// Deployer for an arbitrary source tree
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Deployer for the resources bundled with this crate
    pub fn bundled() -> Self {
        Self::new(bundled_resources())
    }

    /// Source tree being deployed
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Copy the source tree into `target`.
    ///
    /// Not transactional: a failure part way through leaves a mix of old and
    /// new files behind.
    pub async fn deploy(&self, target: impl AsRef<Path>) -> Result<DeployReport> {
        let target = target.as_ref();
        info!("Deploying {:?} -> {:?}", self.source, target);

        let source_meta = fs::metadata(&self.source)
            .await
            .map_err(|e| deploy_error("read source", &self.source, e))?;
        if !source_meta.is_dir() {
            return Err(ExlaunchError::DeployError(format!(
                "source {:?} is not a directory",
                self.source
            )));
        }

        let mut report = DeployReport::default();
        ensure_dir(target, &mut report).await?;

        let mut pending = vec![(self.source.clone(), target.to_path_buf())];
        while let Some((src_dir, dst_dir)) = pending.pop() {
            let mut entries = fs::read_dir(&src_dir)
                .await
                .map_err(|e| deploy_error("list", &src_dir, e))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| deploy_error("list", &src_dir, e))?
            {
                let src = entry.path();
                let dst = dst_dir.join(entry.file_name());

                // metadata() follows symlinks, so linked files are copied by content
                let meta = fs::metadata(&src)
                    .await
                    .map_err(|e| deploy_error("stat", &src, e))?;

                if meta.is_dir() {
                    ensure_dir(&dst, &mut report).await?;
                    pending.push((src, dst));
                } else {
                    debug!("Copy {:?} -> {:?}", src, dst);
                    fs::copy(&src, &dst)
                        .await
                        .map_err(|e| deploy_error("copy", &src, e))?;
                    report.files_copied += 1;
                }
            }
        }

        info!(
            "Deployed {} files ({} new directories)",
            report.files_copied, report.dirs_created
        );
        Ok(report)
    }
}

async fn ensure_dir(path: &Path, report: &mut DeployReport) -> Result<()> {
    let mut missing = 0;
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty()
            || fs::try_exists(ancestor).await.unwrap_or(false)
        {
            break;
        }
        missing += 1;
    }
    if missing == 0 {
        return Ok(());
    }

    fs::create_dir_all(path)
        .await
        .map_err(|e| deploy_error("create", path, e))?;
    report.dirs_created += missing;
    Ok(())
}

fn deploy_error(action: &str, path: &Path, err: std::io::Error) -> ExlaunchError {
    ExlaunchError::DeployError(format!("{} {:?} failed: {}", action, path, err))
}
