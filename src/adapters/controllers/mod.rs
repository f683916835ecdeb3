pub mod health_controller;
pub mod photo_controller;
