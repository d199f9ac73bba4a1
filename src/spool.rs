// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Local clip spool.
//!
//! Fetched clip bytes are written to a per-process spool directory so the
//! player can load them from a local path. Each spooled clip is owned by a
//! [`ClipHandle`]; dropping the handle deletes the file, so replacing the
//! bound clip releases the superseded one.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// A locally playable clip. The file lives exactly as long as the handle.
#[derive(Debug)]
pub(crate) struct ClipHandle {
    video_id: String,
    path: PathBuf,
}

impl ClipHandle {
    pub(crate) fn video_id(&self) -> &str {
        &self.video_id
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ClipHandle {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to remove spooled clip {}: {}", self.path.display(), e);
        }
    }
}

/// The spool directory for this process.
pub(crate) struct ClipSpool {
    dir: PathBuf,
}

impl ClipSpool {
    /// Creates the spool directory under the system temp dir. The directory
    /// is keyed by pid so concurrent instances never collide.
    pub(crate) fn new() -> Result<Self> {
        let dir = std::env::temp_dir().join(format!("camwatch-{}", process::id()));
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create clip spool directory: {}", dir.display()))?;

        Ok(Self { dir })
    }

    /// Writes clip bytes to the spool and returns the owning handle.
    pub(crate) fn store(&self, video_id: &str, bytes: &[u8]) -> Result<ClipHandle> {
        let path = self.dir.join(format!("{}.mp4", video_id));
        fs::write(&path, bytes)
            .with_context(|| format!("Cannot write spooled clip: {}", path.display()))?;

        info!("Spooled clip {} ({} bytes)", video_id, bytes.len());

        Ok(ClipHandle {
            video_id: video_id.to_string(),
            path,
        })
    }
}

impl Drop for ClipSpool {
    fn drop(&mut self) {
        // Best effort; any still-open handle already removed its own file.
        let _ = fs::remove_dir(&self.dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_writes_clip_bytes() {
        let spool = ClipSpool::new().unwrap();
        let handle = spool.store("clip1", b"not really video").unwrap();

        assert_eq!(handle.video_id(), "clip1");
        assert_eq!(fs::read(handle.path()).unwrap(), b"not really video");
    }

    #[test]
    fn test_dropping_the_handle_releases_the_file() {
        let spool = ClipSpool::new().unwrap();
        let handle = spool.store("clip2", b"bytes").unwrap();
        let path = handle.path().to_path_buf();

        assert!(path.exists());
        drop(handle);
        assert!(!path.exists());
    }

    #[test]
    fn test_replacing_a_handle_releases_the_old_clip() {
        let spool = ClipSpool::new().unwrap();

        let mut current = Some(spool.store("clip3", b"first").unwrap());
        let old_path = current.as_ref().unwrap().path().to_path_buf();

        current = Some(spool.store("clip4", b"second").unwrap());
        assert!(!old_path.exists());
        assert!(current.as_ref().unwrap().path().exists());
    }
}
