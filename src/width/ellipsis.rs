use super::core::{char_width, str_width};

/// Marker appended to truncated text. Occupies one column.
pub const ELLIPSIS: char = '…';

/// Shorten `text` to at most `max_width` columns, ending in [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. The cut is width based,
/// so a double-width glyph is dropped whole rather than split.
pub fn truncate(text: &str, max_width: usize) -> String {
    if str_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Hard clip to `max_width` columns without an ellipsis.
pub fn clip(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Right-pad with spaces up to exactly `width` columns. Wider text is clipped first.
pub fn pad_to(text: &str, width: usize) -> String {
    let mut line = clip(text, width);
    let mut display = str_width(&line);
    while display < width {
        line.push(' ');
        display += 1;
    }
    line
}
