use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout utilities for TUI components
pub mod layout {
    use super::*;

    /// Create a centered rectangle with percentage of the parent area
    pub fn centered_rect_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Check if a point is within an area
    pub fn contains(area: Rect, x: u16, y: u16) -> bool {
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }
}

/// Text measuring and wrapping
pub mod text {
    use unicode_width::UnicodeWidthStr;

    /// Wrap text to `width` columns. Explicit newlines are kept and blank
    /// lines survive as empty strings.
    pub fn wrap(text: &str, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let paragraph = paragraph.trim_end();
            if paragraph.trim().is_empty() {
                lines.push(String::new());
                continue;
            }
            lines.extend(
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|line| line.into_owned()),
            );
        }
        lines
    }

    /// Display width of a string in terminal columns
    pub fn width(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    /// Greedily pack labels into rows no wider than `width`, separated by `gap` columns
    pub fn pack<'a>(labels: &[&'a str], width: usize, gap: usize) -> Vec<Vec<&'a str>> {
        let mut rows: Vec<Vec<&'a str>> = Vec::new();
        let mut current: Vec<&'a str> = Vec::new();
        let mut used = 0;

        for label in labels {
            let label_width = self::width(label);
            let needed = if current.is_empty() { label_width } else { used + gap + label_width };
            if !current.is_empty() && needed > width {
                rows.push(std::mem::take(&mut current));
                used = label_width;
            } else {
                used = needed;
            }
            current.push(label);
        }

        if !current.is_empty() {
            rows.push(current);
        }
        rows
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_wrap_keeps_paragraph_breaks() {
            let lines = wrap("one two three\n\nfour", 7);
            assert_eq!(lines, vec!["one two", "three", "", "four"]);
        }

        #[test]
        fn test_wrap_zero_width() {
            assert!(!wrap("abc", 0).is_empty());
        }

        #[test]
        fn test_pack_rows() {
            let rows = pack(&["alpha", "beta", "gamma"], 11, 1);
            assert_eq!(rows, vec![vec!["alpha", "beta"], vec!["gamma"]]);

            let rows = pack(&["a-very-long-label"], 5, 1);
            assert_eq!(rows, vec![vec!["a-very-long-label"]]);
        }
    }
}
