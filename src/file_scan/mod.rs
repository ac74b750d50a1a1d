mod exif;
mod scan;

pub use self::exif::extract_photo_location;
pub use scan::list_photos;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Negate latitudes in the southern and longitudes in the western hemisphere.
    /// Off by default, the map front-end expects the raw magnitudes.
    pub apply_hemisphere_sign: bool,
}
