//! Terminal output formatting.

use architect_core::theme::color::Rgb;
use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// Print rows as an aligned table. The last column is truncated to fit the
/// terminal.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("{}", "Nothing to show.".dimmed());
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
    }

    let last = widths.len().saturating_sub(1);
    let used: usize = widths[..last].iter().map(|w| w + 2).sum();
    let last_width = term_width().saturating_sub(used).max(10);

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == last { h.to_string() } else { pad_right(h, widths[i]) })
        .collect();
    println!("{}", header_line.join("  ").as_str().bold());
    println!("{}", "─".repeat((used + widths[last].min(last_width)).min(term_width())));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == last {
                    truncate_visual(cell, last_width)
                } else {
                    pad_right(cell, widths[i])
                }
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

/// Print a section heading.
pub fn print_section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Print an aligned `key  value` line.
pub fn print_field(key: &str, value: &str) {
    println!("  {}  {}", pad_right(key, 16).as_str().dimmed(), value);
}

/// A two-cell color swatch, blank for values that are not hex colors.
pub fn swatch(value: &str) -> ColoredString {
    match Rgb::from_hex(value) {
        Some(rgb) => "  ".on_truecolor(rgb.r, rgb.g, rgb.b),
        None => "  ".normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a long description", 8), "a long..");
        assert_eq!(truncate_visual("abcdef", 2), "..");
    }
}
