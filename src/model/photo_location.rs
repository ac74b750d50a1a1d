use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
}
