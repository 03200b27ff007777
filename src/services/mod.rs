pub mod enhancer;
pub mod filename;
pub mod pages;
pub mod storage;

pub use enhancer::EnhanceService;
pub use filename::sanitize_filename;
pub use pages::{PageError, PageRenderer};
pub use storage::{ImageStore, Location, StorageConfig, StorageError};
