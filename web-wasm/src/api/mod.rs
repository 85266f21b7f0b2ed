pub mod classifier;
pub mod files;
