//! drive_fetch - A small client library for fetching data from JSON APIs.
//!
//! This library provides functionality to:
//! - Issue configurable HTTP requests with sensible JSON defaults
//! - Branch on the response content type, returning parsed JSON or raw text
//! - Work with Google Drive file metadata (including folder detection)
//!
//! # Example
//!
//! ```no_run
//! use drive_fetch::{ApiClient, ApiData};
//!
//! #[tokio::main]
//! async fn main() -> drive_fetch::Result<()> {
//!     let client = ApiClient::new();
//!
//!     match client.get_api_data("https://api.example.com/programs").await? {
//!         ApiData::Json(value) => println!("{}", value),
//!         ApiData::Text(body) => println!("{}", body),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod mime;
pub mod models;
pub mod options;

// Re-exports for convenience
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use mime::{is_google_drive_folder, FOLDER_MIME_TYPE};
pub use models::{ApiData, DriveFile, FileListResponse};
pub use options::RequestOptions;
