use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Post file not found: {0}")]
    NotFound(PathBuf),
    #[error("Post file is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a post body file and return its content
pub fn read_post(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(IoError::NotUtf8(path.to_path_buf())),
        Err(e) => Err(IoError::Io(e)),
    }
}
