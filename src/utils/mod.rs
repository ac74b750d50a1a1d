pub mod env_reader;
pub mod exif;
pub mod storage_resolver;

#[cfg(test)]
pub mod test_images;
