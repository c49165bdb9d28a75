use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

use crate::common::PackageResult;

/// Working directory of one generation run.
///
/// The directory lives under the shared scratch root with a name unique to
/// the run and is removed when the handle is dropped, whichever way the run
/// ends.
#[derive(Debug)]
pub struct RunDirectory {
    run_id: Uuid,
    dir: TempDir,
}

impl RunDirectory {
    pub fn create(scratch_root: &Path, run_id: Uuid) -> PackageResult<Self> {
        fs::create_dir_all(scratch_root)?;
        let dir = tempfile::Builder::new()
            .prefix(&format!("extracted_{}_", run_id.simple()))
            .tempdir_in(scratch_root)?;
        Ok(RunDirectory { run_id, dir })
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a package part given its `/`-separated name.
    pub fn part(&self, name: &str) -> PathBuf {
        name.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.dir.path().to_path_buf(), |path, segment| path.join(segment))
    }

    /// Removes the directory now, reporting failures instead of ignoring them.
    pub fn close(self) -> PackageResult<()> {
        self.dir.close()?;
        Ok(())
    }
}
