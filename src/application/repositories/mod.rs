pub mod photo_repository;
