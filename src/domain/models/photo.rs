use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photo as it currently exists in the upload directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPhoto {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub size_kib: u64,
}

impl StoredPhoto {
    pub fn new(
        name: String,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
        size_bytes: u64,
    ) -> Self {
        Self {
            name,
            created_at,
            modified_at,
            size_kib: size_bytes / 1024,
        }
    }
}

/// A single uploaded file, alive only for the duration of one Add call.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: String, content_type: String, content: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            content,
        }
    }

    pub fn validate_size(&self, max_size: u64) -> bool {
        self.size() <= max_size
    }

    pub fn is_image(&self) -> bool {
        self.content_type
            .contains(crate::domain::config::upload::IMAGE_MIME_TYPE)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}
