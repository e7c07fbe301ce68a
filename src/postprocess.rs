//! Sanitizes raw model output before it is returned: quote stripping,
//! newline collapsing, and the hard character-count bound.

const LEADING_QUOTES: &[char] = &['"', '\'', '「', '『', '“', '‘'];
const TRAILING_QUOTES: &[char] = &['"', '\'', '」', '』', '”', '’'];

/// Collapses runs of 3 or more newlines down to exactly 2.
fn collapse_newlines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut run = 0usize;
    for ch in input.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                output.push(ch);
            }
        } else {
            run = 0;
            output.push(ch);
        }
    }
    output
}

/// Truncates to `max_length` characters, reserving 3 for the ellipsis marker.
/// Lossy on purpose: the bound matters more than sentence integrity.
fn truncate(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        return input.to_owned();
    }
    let keep = max_length.saturating_sub(3);
    let mut output: String = input.chars().take(keep).collect();
    output.push_str("...");
    output
}

pub fn clean_generated_text(raw: &str, max_length: usize) -> String {
    let text = raw
        .trim()
        .trim_start_matches(LEADING_QUOTES)
        .trim_end_matches(TRAILING_QUOTES);
    let text = collapse_newlines(text);
    truncate(text.trim(), max_length)
}
