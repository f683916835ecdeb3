#[derive(Debug)]
pub enum ApplicationError {
    NotFound,
    UnsupportedMediaType,
    NoFileSelected,
    FileTooLarge,
    NotAnImage,
    /// Decode, resize, encode or save failed during Add.
    ProcessingFailed(String),
    BadRequest(String),
    InternalError(String),
}
