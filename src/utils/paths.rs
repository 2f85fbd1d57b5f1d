use std::env;
use std::path::Path;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Extension given to every stored item
const ITEM_EXTENSION: &str = "json";

// Characters that can't appear verbatim in a file name on any supported platform,
// plus '%' so distinct keys never share a file
const KEY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b':')
    .add(b'*')
    .add(b'?')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'|')
    .add(b' ');

/// Encodes a storage key into a file name
///
/// # Examples
///
/// ```
/// use storefront_session::utils::paths::key_file_name;
///
/// assert_eq!(key_file_name("cartCount"), "cartCount.json");
/// assert_eq!(key_file_name("a/b"), "a%2Fb.json");
/// ```
pub fn key_file_name(key: &str) -> String {
    format!("{}.{}", utf8_percent_encode(key, KEY_ENCODE_SET), ITEM_EXTENSION)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    path_str.into_owned()
}
