mod context;
mod count;

pub use context::{color_choice_to_mode, load_config, write_output};
pub use count::{count_file, count_files, count_path, run_count};
