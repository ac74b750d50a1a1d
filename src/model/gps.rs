/// A GPS position component as stored in EXIF: degrees, minutes and seconds.
///
/// EXIF defines the components as unsigned rationals, so only magnitudes are kept.
/// The sign of a position comes from the matching [`Hemisphere`] reference tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinate {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl GpsCoordinate {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees: degrees.abs(),
            minutes: minutes.abs(),
            seconds: seconds.abs(),
        }
    }

    pub fn to_decimal(&self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses the value of a `GPSLatitudeRef` or `GPSLongitudeRef` tag
    pub fn from_ref(value: &[u8]) -> Option<Self> {
        match value.first()?.to_ascii_uppercase() {
            b'N' => Some(Self::North),
            b'S' => Some(Self::South),
            b'E' => Some(Self::East),
            b'W' => Some(Self::West),
            _ => None,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}
