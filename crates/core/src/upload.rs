//! Upload validation and filename generation.
//!
//! The HTTP layer streams multipart parts and writes bytes to disk; this
//! module decides whether a part is acceptable and what it is called on disk.

use rand::Rng;

/// Maximum accepted size of a single uploaded file (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for image uploads.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Public path prefix under which stored uploads are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Default image for articles created without one.
pub const DEFAULT_ARTICLE_IMAGE: &str = "/uploads/default-article.jpg";

/// Default avatar for testimonials submitted without one.
pub const DEFAULT_AVATAR: &str = "/uploads/avatar-default.png";

/// The feature an upload belongs to. Determines the stored filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadContext {
    Package,
    Article,
    Hero,
    Experience,
    Gallery,
    Generic,
}

impl UploadContext {
    pub fn prefix(self) -> &'static str {
        match self {
            UploadContext::Package => "package",
            UploadContext::Article => "article",
            UploadContext::Hero => "hero",
            UploadContext::Experience => "experience",
            UploadContext::Gallery => "gallery",
            UploadContext::Generic => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid file type '{0}'. Allowed types: {types}", types = ALLOWED_MIME_TYPES.join(", "))]
    InvalidType(String),

    #[error("File too large. Maximum size is {}MB.", .limit / (1024 * 1024))]
    TooLarge { limit: usize },

    #[error("Too many files. Only one file allowed.")]
    TooManyFiles,

    #[error("No file uploaded.")]
    Missing,
}

/// Strip parameters and normalise case: `"Image/PNG; x=y"` -> `"image/png"`.
pub fn normalize_mime(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Accept the part only if its declared content type is on the allow-list.
pub fn validate_mime(content_type: Option<&str>) -> Result<String, UploadError> {
    let mime = content_type.map(normalize_mime).unwrap_or_default();
    if ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        Ok(mime)
    } else {
        Err(UploadError::InvalidType(mime))
    }
}

/// Reject payloads larger than `limit` bytes.
pub fn check_size(len: usize, limit: usize) -> Result<(), UploadError> {
    if len > limit {
        Err(UploadError::TooLarge { limit })
    } else {
        Ok(())
    }
}

/// Build the on-disk name: `<prefix>-<unix millis>-<random>.<ext>`.
///
/// The client-supplied name only contributes its extension, and only when
/// that extension is short and alphanumeric.
pub fn generate_filename(
    context: UploadContext,
    original_name: Option<&str>,
    mime: &str,
) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::rng().random_range(0..1_000_000_000);
    let ext = extension_for(original_name, mime);
    format!("{}-{millis}-{random}.{ext}", context.prefix())
}

fn extension_for(original_name: Option<&str>, mime: &str) -> String {
    let from_name = original_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        });

    from_name.unwrap_or_else(|| {
        match mime {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "jpg",
        }
        .to_string()
    })
}

/// Public URL for a stored file name.
pub fn public_url(filename: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{filename}")
}

/// Recover the stored file name from a public URL.
///
/// Only the last path segment is used, so a stored value can never point the
/// server outside the uploads directory.
pub fn filename_from_url(url: &str) -> Option<&str> {
    let name = url.rsplit(['/', '\\']).next()?;
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}
