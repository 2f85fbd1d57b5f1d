/// Queries longer than this are rejected by the input box
pub const MAX_QUERY_LEN: usize = 256;

/// Trim raw input, returning `None` for an empty or whitespace-only query
pub fn validate_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
