pub mod aggregate;
pub mod filter;
pub mod format;
pub mod loader;
pub mod stats;
pub mod table;
