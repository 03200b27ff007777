pub mod files;
pub mod upload;

pub use files::{content_type_for, handle_download, handle_processed_file, handle_uploaded_file};
pub use upload::{handle_index, handle_upload, UploadForm};
