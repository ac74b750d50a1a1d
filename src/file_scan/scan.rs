use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::file_scan::{ScanOptions, extract_photo_location};
use crate::model::photo_location::PhotoLocation;

const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Lists the geotagged images directly inside `image_folder`, in directory order.
///
/// Fails as a whole if the folder can't be listed or any image can't be opened.
pub fn list_photos(
    image_folder: &Path,
    options: ScanOptions,
) -> std::io::Result<Vec<PhotoLocation>> {
    let instant = Instant::now();

    let image_paths: Vec<PathBuf> = WalkDir::new(image_folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter(|entry| entry.as_ref().map_or(true, is_image))
        .map(|entry| entry.map(DirEntry::into_path))
        .collect::<Result<_, walkdir::Error>>()?;

    let photos: Vec<PhotoLocation> = image_paths
        .par_iter()
        .map(|path| extract_photo_location(path, options))
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    debug!(
        "Found {} geotagged photos out of {} images in {} ms",
        photos.len(),
        image_paths.len(),
        instant.elapsed().as_millis()
    );

    Ok(photos)
}

fn is_image(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }

    let file_name = entry.file_name().to_string_lossy().to_lowercase();

    IMAGE_EXTENSIONS
        .iter()
        .any(|extension| file_name.ends_with(extension))
}
