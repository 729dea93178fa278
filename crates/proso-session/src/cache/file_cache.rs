use crate::{CachedSession, ClientCache, SessionError, SessionResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// JSON file cache surviving restarts.
///
/// Writes go to a temp file which is synced and renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl ClientCache for FileCache {
    fn load(&self) -> CachedSession {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No session cache at {:?}: {e}", self.path);
                return CachedSession::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Session cache corrupted at {:?}, ignoring it: {e}", self.path);
            CachedSession::default()
        })
    }

    fn store(&self, session: &CachedSession) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::cache_write(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(session)?;
        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| SessionError::cache_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::cache_write(self.path.clone(), e)
        })?;

        debug!("Session cache written to {:?}", self.path);
        Ok(())
    }
}
