// Command handlers module
pub mod config;
pub mod once;
pub mod output;
pub mod run;
pub mod version;

// Re-exports for cleaner imports
pub use config::execute as config;
pub use once::execute as once;
pub use output::OutputFormat;
pub use run::execute as run;
pub use version::execute as version;
