//! Terminal output sanitization
//!
//! Search queries come from the user and from storage, which anyone can edit. They are
//! sanitized with [`sanitize_for_display`] before being printed, so escape sequences in
//! a stored query can't move the cursor or recolor the terminal.

/// Strips ANSI CSI sequences and control characters, keeping text on one line
///
/// # Examples
///
/// ```
/// use storefront_session::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mAirPods\x1b[0m"), "AirPods");
/// assert_eq!(sanitize_for_display("iPad\nPro"), "iPad Pro");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI: ESC '[' params... final letter
            if chars.peek() == Some(&'[') {
                chars.next();
                for next_ch in chars.by_ref() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        match ch {
            '\n' | '\r' | '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
