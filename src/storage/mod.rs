pub mod medium;
pub mod record_store;
pub mod seed;

pub use medium::{FileMedium, KeyValueMedium, MemoryMedium};
pub use record_store::RecordStore;
