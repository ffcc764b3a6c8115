//! Writing rendered files to their destination

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::AssetError;
use crate::renderer::RenderedFile;

/// Write rendered files into `destination`, creating it if needed
///
/// Existing files with the same name are overwritten. Returns the written paths.
pub fn write_rendered(files: &[RenderedFile], destination: impl AsRef<Path>) -> Result<Vec<PathBuf>, AssetError> {
    let destination = destination.as_ref();
    fs::create_dir_all(destination).map_err(|source| AssetError::OutputWrite {
        path: destination.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = destination.join(&file.file_name);
        fs::write(&path, &file.contents).map_err(|source| AssetError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
