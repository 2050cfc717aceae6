//! Greedy word wrapping against the estimated text width.

use folio_types::estimated_text_width;

/// Breaks `text` into lines no wider than `max_width` at font `size`.
///
/// Explicit newlines are hard breaks; each segment wraps independently and
/// an empty segment yields one empty line. A single word wider than the
/// line is split mid-word rather than overflowing.
pub fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment.trim_end(), max_width, size, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, max_width: f32, size: f32, lines: &mut Vec<String>) {
    if segment.trim().is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    for word in segment.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if estimated_text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if estimated_text_width(word, size) <= max_width {
            current = word.to_string();
        } else {
            current = split_long_word(word, max_width, size, lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Emits full-width chunks of an overlong word, returning the remainder.
fn split_long_word(word: &str, max_width: f32, size: f32, lines: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if estimated_text_width(&chunk, size) > max_width {
            let overflow = match chunk.pop() {
                Some(last) => last,
                None => continue,
            };
            if !chunk.is_empty() {
                lines.push(std::mem::take(&mut chunk));
            }
            chunk.push(overflow);
        }
    }
    chunk
}
