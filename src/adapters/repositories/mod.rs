mod fs_photo_repository;

pub use fs_photo_repository::FsPhotoRepository;
