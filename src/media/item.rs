//! Wallpaper record representation.

use std::fmt;

/// Prefix applied to every local wallpaper filename.
pub const FILENAME_PREFIX: &str = "wh-";

/// Image formats kept by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Webp,
}

impl ImageExtension {
    /// Match a lower-case extension (without the dot) against the allowed set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" => Some(ImageExtension::Jpg),
            "jpeg" => Some(ImageExtension::Jpeg),
            "png" => Some(ImageExtension::Png),
            "webp" => Some(ImageExtension::Webp),
            _ => None,
        }
    }

    /// Dotted suffix, as written into filenames and the manifest.
    pub fn suffix(&self) -> &'static str {
        match self {
            ImageExtension::Jpg => ".jpg",
            ImageExtension::Jpeg => ".jpeg",
            ImageExtension::Png => ".png",
            ImageExtension::Webp => ".webp",
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A normalized wallpaper from the search API.
///
/// Fields are private so a record cannot drift from its derived filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperRecord {
    id: String,
    width: u32,
    height: u32,
    url: String,
    ext: ImageExtension,
    filename: String,
}

impl WallpaperRecord {
    pub fn new(id: String, width: u32, height: u32, url: String, ext: ImageExtension) -> Self {
        let filename = format!("{}{}{}", FILENAME_PREFIX, id, ext.suffix());
        Self {
            id,
            width,
            height,
            url,
            ext,
            filename,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ext(&self) -> ImageExtension {
        self.ext
    }

    /// Local filename, `wh-<id><ext>`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Width divided by height. Callers must rule out a zero height first.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
