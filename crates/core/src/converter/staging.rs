//! Staging files that hold encoder output until it is complete.

use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::{debug, warn};

use super::error::ConverterError;

const STAGING_PREFIX: &str = ".m4a2mp3-";
const STAGING_SUFFIX: &str = ".mp3";

/// A uniquely named file next to the final output.
///
/// The file is removed when this value is dropped unless [`StagingFile::commit`]
/// renamed it into place first. That covers early returns, panics and
/// cancelled futures alike.
#[derive(Debug)]
pub(crate) struct StagingFile {
    path: TempPath,
}

impl StagingFile {
    /// Creates an empty staging file inside `dir`.
    pub(crate) fn create_in(dir: &Path) -> Result<Self, ConverterError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX).suffix(STAGING_SUFFIX);

        // Temp files default to 0600; the committed MP3 should look like any other file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        let file = builder
            .tempfile_in(dir)
            .map_err(|source| ConverterError::StagingFailed {
                dir: dir.to_path_buf(),
                source,
            })?;

        // Close our handle so the encoder is the only writer.
        let path = file.into_temp_path();
        debug!(staging = %path.display(), "Created staging file");
        Ok(Self { path })
    }

    /// Path the encoder should write to.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically renames the staging file onto `destination`, replacing
    /// whatever is there.
    ///
    /// On failure the staging file is deleted before the error is returned.
    pub(crate) fn commit(self, destination: &Path) -> Result<(), ConverterError> {
        self.path.persist(destination).map_err(|e| {
            // `e.path` drops here and removes the staging file.
            ConverterError::CommitFailed {
                path: destination.to_path_buf(),
                source: e.error,
            }
        })
    }

    /// Deletes the staging file now.
    pub(crate) fn discard(self) {
        let path: PathBuf = self.path.to_path_buf();
        if let Err(e) = self.path.close() {
            warn!(staging = %path.display(), error = %e, "Failed to remove staging file");
        } else {
            debug!(staging = %path.display(), "Discarded staging file");
        }
    }
}
