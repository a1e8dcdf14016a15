pub mod rollup;
pub mod webpack;

// Re-export commonly used items
pub use rollup::RollupLicenseOptions;
pub use webpack::{WebpackLicenseOptions, DEFAULT_OUTPUT_FILENAME};
