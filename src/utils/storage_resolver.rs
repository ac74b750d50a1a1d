use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::path::{Path, PathBuf};

/// URL prefix under which the image folder is served
pub const STATIC_MOUNT: &str = "/static";

pub struct StorageResolver {
    pub image_folder: PathBuf,
}

impl StorageResolver {
    pub fn new(image_folder: PathBuf) -> Self {
        Self { image_folder }
    }
}

/// Characters that would end or reshape a path segment
const FILE_NAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Public URL of an image, built from its file name only.
/// Any directory components of `path` are dropped and the name is percent-encoded,
/// so names with `#`, `?` or `%` still resolve through the static mount.
pub fn public_url(path: &Path) -> Option<String> {
    path.file_name().map(|name| {
        format!(
            "{STATIC_MOUNT}/{}",
            utf8_percent_encode(&name.to_string_lossy(), FILE_NAME)
        )
    })
}
