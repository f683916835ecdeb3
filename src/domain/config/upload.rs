/// Largest accepted upload, in bytes (1 MiB).
pub const MAX_FILE_SIZE: u64 = 1_048_576;

/// Substring the declared content type must contain.
pub const IMAGE_MIME_TYPE: &str = "image";

/// Longest side, in pixels, a stored photo may have.
pub const MAX_SIDE_SIZE: u32 = 100;

/// Extensions (lowercase, without the dot) that List reports.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "bmp", "png", "gif", "tiff"];

pub fn has_allowed_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
