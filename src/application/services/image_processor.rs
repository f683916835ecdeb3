//! Decode → resize-to-max-side → JPEG encode, entirely in memory.
//!
//! Everything here is CPU bound and synchronous; callers on the async runtime
//! should run it through `tokio::task::spawn_blocking`.

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, ImageResult};

const JPEG_QUALITY: u8 = 90;

/// Size an image of `width` x `height` gets when its longest side is bounded
/// by `max_side`. Aspect ratio is kept and images are never upscaled.
///
/// Each side is rounded to the nearest pixel with halves going away from zero
/// (32.5 becomes 33, not the banker's 32), then clamped to at least 1 so very
/// thin images such as 1000x1 still produce a valid 100x1 result instead of
/// failing.
pub fn target_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }

    let coefficient = f64::from(max_side) / f64::from(longest);
    let scale = |side: u32| ((f64::from(side) * coefficient).round() as u32).max(1);

    (scale(width), scale(height))
}

pub fn resize_to_max_side(image: DynamicImage, max_side: u32) -> DynamicImage {
    let (width, height) = target_dimensions(image.width(), image.height(), max_side);
    if (width, height) == (image.width(), image.height()) {
        return image;
    }

    // Catmull-Rom is the bicubic kernel.
    image.resize_exact(width, height, FilterType::CatmullRom)
}

/// JPEG has no alpha channel, so transparent pixels are flattened to RGB first.
pub fn encode_jpeg(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut buffer = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
        encoder.encode_image(&rgb)?;
    }
    Ok(buffer)
}

/// Full pipeline for one upload. The input format is sniffed from the bytes.
pub fn process_upload(content: &[u8], max_side: u32) -> ImageResult<Vec<u8>> {
    let original = image::load_from_memory(content)?;
    let resized = resize_to_max_side(original, max_side);
    encode_jpeg(&resized)
}
