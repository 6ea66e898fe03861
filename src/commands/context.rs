use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default locations, or not at all.
///
/// # Errors
/// Returns an error if a config file is found but cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write rendered output to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the output file or its parent directories cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
