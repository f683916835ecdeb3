pub mod photo_dto;
