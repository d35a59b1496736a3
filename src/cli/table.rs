//! Fixed-width table cells for the prompt listing.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide characters keep the columns aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if max_width == 0 {
        WidthTruncationDecision::Empty
    } else if text.width() <= max_width {
        WidthTruncationDecision::Unchanged
    } else if max_width <= ELLIPSIS.len() {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(ELLIPSIS.len());
            let mut truncated = String::new();
            let mut current_width = 0_usize;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width.saturating_add(char_width) > target_width {
                    break;
                }
                truncated.push(ch);
                current_width = current_width.saturating_add(char_width);
            }
            format!("{truncated}{ELLIPSIS}")
        }
    }
}

/// Renders `text` as one cell exactly `width` columns wide.
///
/// Line breaks and whitespace runs collapse to single spaces.
pub(crate) fn fit_cell(text: &str, width: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated = truncate_to_display_width(&single_line, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::{fit_cell, truncate_to_display_width};

    #[rstest]
    #[case::fits("hello", 10, "hello")]
    #[case::zero_width("abcdef", 0, "")]
    #[case::dot_fallback("abcdef", 2, "..")]
    #[case::ellipsis("abcdefghij", 6, "abc...")]
    #[case::wide_characters("你好世界", 5, "你...")]
    fn truncates_by_display_width(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_display_width(text, width), expected);
    }

    #[test]
    fn cells_are_padded_to_the_column_width() {
        let cell = fit_cell("Active", 8);

        assert_eq!(cell, "Active  ");
    }

    #[test]
    fn cells_collapse_line_breaks() {
        let cell = fit_cell("first line\n  second", 30);

        assert!(cell.starts_with("first line second"));
        assert_eq!(cell.width(), 30);
    }

    #[test]
    fn wide_cells_keep_their_column_width() {
        let cell = fit_cell("提示词库管理", 9);

        assert_eq!(cell.width(), 9);
        assert!(cell.contains("..."));
    }
}
