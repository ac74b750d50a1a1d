use std::path::Path;
use tracing::{debug, warn};

use crate::file_scan::ScanOptions;
use crate::model::photo_location::PhotoLocation;
use crate::utils::exif::{GpsTag, gps_coordinate, gps_hemisphere, read_exif};
use crate::utils::storage_resolver::public_url;

pub fn extract_photo_location(
    path: &Path,
    options: ScanOptions,
) -> std::io::Result<Option<PhotoLocation>> {
    let Some(exif) = read_exif(path)? else {
        return Ok(None);
    };

    let (Some(latitude), Some(longitude)) = (
        gps_coordinate(&exif, GpsTag::Latitude),
        gps_coordinate(&exif, GpsTag::Longitude),
    ) else {
        debug!("No GPS position: {}", path.display());
        return Ok(None);
    };

    let mut latitude = latitude.to_decimal();
    let mut longitude = longitude.to_decimal();

    if !latitude.is_finite() || !longitude.is_finite() {
        warn!("Invalid GPS position: {}", path.display());
        return Ok(None);
    }

    if options.apply_hemisphere_sign {
        if let Some(hemisphere) = gps_hemisphere(&exif, GpsTag::Latitude) {
            latitude *= hemisphere.sign();
        }
        if let Some(hemisphere) = gps_hemisphere(&exif, GpsTag::Longitude) {
            longitude *= hemisphere.sign();
        }
    }

    Ok(public_url(path).map(|image_url| PhotoLocation {
        latitude,
        longitude,
        image_url,
    }))
}
