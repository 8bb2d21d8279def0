use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{AdminError, Result};

const SESSION_DIR: &str = "safari-blog";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
}

/// Bearer token persisted between invocations.
///
/// The token is opaque; it is never validated locally. An expired token is
/// only noticed when the backend rejects a request.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    token: Option<String>,
}

impl Session {
    /// `<data dir>/safari-blog/session.json`, if the platform has a data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(SESSION_DIR).join(SESSION_FILE))
    }

    /// Load the session stored at `path`. A missing file is an empty session.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let token = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: SessionFile = serde_json::from_str(&text)?;
                file.token
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(source) => return Err(AdminError::SessionFile { path, source }),
        };
        log::debug!(
            "Loaded session from {} ({})",
            path.display(),
            if token.is_some() { "signed in" } else { "signed out" }
        );
        Ok(Self { path, token })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store a new token and write it to disk.
    pub fn save(&mut self, token: impl Into<String>) -> Result<()> {
        self.token = Some(token.into());
        let file = SessionFile {
            token: self.token.clone(),
        };
        let text = serde_json::to_string_pretty(&file)?;

        let io_err = |source: io::Error| AdminError::SessionFile {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, text).map_err(io_err)?;
        log::info!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// Forget the token and remove the session file.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(AdminError::SessionFile {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
