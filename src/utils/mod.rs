pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use paths::{format_path_with_tilde, key_file_name};
pub use terminal::sanitize_for_display;
