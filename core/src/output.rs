use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};

use crate::error::{GoboError, Result};

// `gobo_021.png`; ids past 999 just grow wider
pub fn gobo_file_name(id: u32) -> String {
    format!("gobo_{:03}.png", id)
}

/// Write `image` as `<dir>/gobo_<id>.png`, creating `dir` first if needed.
pub fn save_gobo(image: &GrayImage, dir: &Path, id: u32) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| GoboError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(gobo_file_name(id));
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| GoboError::Encode {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
