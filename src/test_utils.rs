use std::{io::Cursor, sync::Arc};

use axum_test::TestServer;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use crate::adapters::{
    repositories::FsPhotoRepository, routes::router, state::AppState,
};
use crate::application::{
    repositories::photo_repository::PhotoRepository, services::PhotoService,
};

/// PNG-encoded gradient of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
    encode_png(DynamicImage::ImageRgb8(image))
}

pub fn rgba_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| Rgba([255, 0, 0, (x % 256) as u8]));
    encode_png(DynamicImage::ImageRgba8(image))
}

fn encode_png(image: DynamicImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

pub fn test_state(dir: &TempDir, repository: Arc<dyn PhotoRepository>) -> AppState {
    AppState {
        upload_dir: dir.path().to_path_buf(),
        photo_service: Arc::new(PhotoService::new(repository)),
    }
}

pub fn test_server(dir: &TempDir) -> TestServer {
    test_server_with(dir, Arc::new(FsPhotoRepository::new(dir.path())))
}

/// Server over `dir` whose photo store is `repository`.
pub fn test_server_with(dir: &TempDir, repository: Arc<dyn PhotoRepository>) -> TestServer {
    TestServer::new(router(test_state(dir, repository))).unwrap()
}
