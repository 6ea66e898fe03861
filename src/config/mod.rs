mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, CustomLanguageConfig};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
