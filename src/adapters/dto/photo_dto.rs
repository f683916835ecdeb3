use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::photo::StoredPhoto;

#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "modifiedAt")]
    pub modified_at: DateTime<Utc>,
    #[serde(rename = "sizeKiB")]
    pub size_kib: u64,
}

impl From<StoredPhoto> for PhotoResponse {
    fn from(photo: StoredPhoto) -> Self {
        Self {
            name: photo.name,
            created_at: photo.created_at,
            modified_at: photo.modified_at,
            size_kib: photo.size_kib,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoListResponse {
    #[serde(rename = "Photos")]
    pub photos: Vec<PhotoResponse>,
}

impl From<Vec<StoredPhoto>> for PhotoListResponse {
    fn from(photos: Vec<StoredPhoto>) -> Self {
        Self {
            photos: photos.into_iter().map(PhotoResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePhotoResponse {
    pub message: String,
}

impl DeletePhotoResponse {
    pub fn for_photo(name: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_is_wrapped_under_photos_key() {
        let now = Utc::now();
        let response = PhotoListResponse::from(vec![StoredPhoto::new(
            "cat.jpg".to_string(),
            now,
            now,
            4096,
        )]);

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["Photos"][0]["name"], json!("cat.jpg"));
        assert_eq!(value["Photos"][0]["sizeKiB"], json!(4));
        assert!(value["Photos"][0]["createdAt"].is_string());
        assert!(value["Photos"][0]["modifiedAt"].is_string());
    }

    #[test]
    fn delete_message_names_the_photo() {
        assert_eq!(
            DeletePhotoResponse::for_photo("cat.jpg").message,
            "cat.jpg deleted successfully"
        );
    }
}
