use crate::catalog::StaticCatalog;
use crate::content::Post;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Post file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to parse post file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse a single post file.
pub fn read_post(path: &Path) -> Result<Post, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for post files (`*.json`) in the content directory.
pub fn scan_post_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load every post file under `content_root` into a catalog.
///
/// A file that fails to parse is skipped with a warning: one broken
/// post must never take the whole catalog down.
pub fn load_catalog(content_root: &Path) -> Result<StaticCatalog, IoError> {
    let files = scan_post_files(content_root)?;

    let mut posts = Vec::with_capacity(files.len());
    for path in files {
        match read_post(&path) {
            Ok(post) => posts.push(post),
            Err(e) => {
                log::warn!("skipping unreadable post file {}: {e}", path.display());
            }
        }
    }

    Ok(StaticCatalog::new(posts))
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}
