// Adapters layer: concrete implementations backed by the local filesystem.

pub mod fs;
pub mod storage;

pub use fs::LocalFs;
pub use storage::LocalStorage;
