use exif::{Exif, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::model::gps::{GpsCoordinate, Hemisphere};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsTag {
    Latitude,
    Longitude,
}

impl GpsTag {
    fn value_tag(self) -> Tag {
        match self {
            GpsTag::Latitude => Tag::GPSLatitude,
            GpsTag::Longitude => Tag::GPSLongitude,
        }
    }

    fn ref_tag(self) -> Tag {
        match self {
            GpsTag::Latitude => Tag::GPSLatitudeRef,
            GpsTag::Longitude => Tag::GPSLongitudeRef,
        }
    }
}

/// Opens the file and decodes its EXIF container.
///
/// Only a failure to open the file is an error. Files that hold no EXIF data,
/// or that the decoder can't make sense of, resolve to `None`.
pub fn read_exif<P: AsRef<Path>>(path: P) -> std::io::Result<Option<Exif>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(&file);

    match exif::Reader::new().read_from_container(&mut bufreader) {
        Ok(exif) => Ok(Some(exif)),
        Err(e) => {
            debug!("No EXIF data in {}: {e}", path.display());
            Ok(None)
        }
    }
}

pub fn gps_coordinate(exif: &Exif, tag: GpsTag) -> Option<GpsCoordinate> {
    let field = exif.get_field(tag.value_tag(), In::PRIMARY)?;

    match value_to_components(&field.value)?[..] {
        [degrees, minutes, seconds, ..] => Some(GpsCoordinate::new(degrees, minutes, seconds)),
        _ => None,
    }
}

pub fn gps_hemisphere(exif: &Exif, tag: GpsTag) -> Option<Hemisphere> {
    let field = exif.get_field(tag.ref_tag(), In::PRIMARY)?;

    match &field.value {
        Value::Ascii(vec) => vec.first().and_then(|v| Hemisphere::from_ref(v)),
        _ => None,
    }
}

fn value_to_components(value: &Value) -> Option<Vec<f64>> {
    let components = match value {
        Value::Rational(vec) => vec.iter().map(|r| r.to_f64()).collect(),
        Value::SRational(vec) => vec.iter().map(|r| r.to_f64()).collect(),
        Value::Byte(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::Short(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::Long(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::SShort(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::SLong(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::Float(vec) => vec.iter().map(|v| f64::from(*v)).collect(),
        Value::Double(vec) => vec.clone(),
        _ => return None,
    };

    Some(components)
}
