pub mod gps;
pub mod photo_location;
