//! Display-width aware word wrapping

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` display columns. Words longer than a line are
/// split at character boundaries.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_width + cw > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += cw;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lay out `items` left to right, separated by one space, wrapping to
/// `width`. Returns the items of each line.
pub fn flow<'a>(items: &'a [String], width: usize) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut used = 0;

    for item in items {
        let w = item.width();
        let fits = !rows.is_empty() && used + 1 + w <= width;
        if fits {
            if let Some(row) = rows.last_mut() {
                row.push(item.as_str());
            }
            used += 1 + w;
        } else {
            rows.push(vec![item.as_str()]);
            used = w;
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert!(wrap("anything", 0).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_flow_items() {
        let items: Vec<String> = ["[Unity]", "[C#]", "[Pixel Art]"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = flow(&items, 12);
        assert_eq!(rows, vec![vec!["[Unity]", "[C#]"], vec!["[Pixel Art]"]]);
    }
}
