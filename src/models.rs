//! Data models for API responses and Google Drive file metadata.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::mime::is_google_drive_folder;

/// Payload of a successful API response.
///
/// Responses declaring a JSON content type are parsed into
/// [`ApiData::Json`]; every other response body is handed back verbatim
/// as [`ApiData::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiData {
    /// Parsed structured body.
    Json(Value),
    /// Raw body of a response with a non-JSON content type.
    Text(String),
}

impl ApiData {
    /// Whether the payload was parsed as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, ApiData::Json(_))
    }

    /// The parsed JSON value, if the response declared a JSON content type.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiData::Json(value) => Some(value),
            ApiData::Text(_) => None,
        }
    }

    /// The raw text body, if the response did not declare a JSON content type.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiData::Json(_) => None,
            ApiData::Text(text) => Some(text),
        }
    }

    /// Deserialize the payload into a typed value.
    ///
    /// The `Text` variant is parsed as JSON as well, which covers servers
    /// that serve JSON bodies under a non-JSON content type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ApiData::Json(value) => Ok(serde_json::from_value(value)?),
            ApiData::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

/// Metadata for a file or folder in Google Drive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub modified_time: Option<String>,
    #[serde(default)]
    pub parents: Option<Vec<String>>,
}

impl DriveFile {
    /// Whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(is_google_drive_folder)
    }
}

// The Drive API encodes sizes as decimal strings.
fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl std::fmt::Display for DriveFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size_str = self
            .size
            .map(format_size)
            .unwrap_or_else(|| "-".to_string());
        let mime = self.mime_type.as_deref().unwrap_or("-");
        write!(f, "{}\t{}\t{}\t{}", self.id, size_str, mime, self.name)
    }
}

/// Format bytes into human-readable size.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Response from the files.list API endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
