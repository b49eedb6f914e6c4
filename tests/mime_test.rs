//! Tests for Google Drive folder MIME detection.

use drive_fetch::{is_google_drive_folder, DriveFile, FOLDER_MIME_TYPE};

mod folder_predicate {
    use super::*;

    #[test]
    fn exact_sentinel_is_folder() {
        assert!(is_google_drive_folder("application/vnd.google-apps.folder"));
    }

    #[test]
    fn sentinel_constant_is_folder() {
        assert!(is_google_drive_folder(FOLDER_MIME_TYPE));
    }

    #[test]
    fn document_mime_is_not_folder() {
        assert!(!is_google_drive_folder(
            "application/vnd.google-apps.document"
        ));
    }

    #[test]
    fn empty_string_is_not_folder() {
        assert!(!is_google_drive_folder(""));
    }

    #[test]
    fn uppercase_variant_is_not_folder() {
        assert!(!is_google_drive_folder("APPLICATION/VND.GOOGLE-APPS.FOLDER"));
    }

    #[test]
    fn near_matches_are_not_folders() {
        assert!(!is_google_drive_folder("application/vnd.google-apps"));
        assert!(!is_google_drive_folder("application/vnd.google-apps.folders"));
        assert!(!is_google_drive_folder("vnd.google-apps.folder"));
    }
}

mod drive_file_integration {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_folder_detection_agrees_with_predicate() {
        let folder: DriveFile = serde_json::from_value(json!({
            "id": "folder123",
            "name": "My Folder",
            "mimeType": "application/vnd.google-apps.folder"
        }))
        .unwrap();

        let file: DriveFile = serde_json::from_value(json!({
            "id": "file123",
            "name": "notes.txt",
            "mimeType": "text/plain"
        }))
        .unwrap();

        assert!(folder.is_folder());
        assert!(!file.is_folder());
        assert_eq!(
            folder.is_folder(),
            is_google_drive_folder(folder.mime_type.as_deref().unwrap())
        );
    }
}
