/// Fixed rows around the list: help line, blank, "more above" marker,
/// "more below" marker, blank, summary line.
pub const CHROME_ROWS: u16 = 6;

/// Smallest list window, used when the terminal is shorter than the chrome.
pub const MIN_VIEWPORT_ROWS: usize = 5;

/// Scroll window over render rows: rows `[offset, offset + height)` are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Viewport {
            offset: 0,
            height: height.max(1),
        }
    }

    /// Scroll just enough to bring `row` into view.
    pub fn follow(&mut self, row: usize) {
        self.offset = reposition(row, self.offset, self.height);
    }

    /// Last visible row (exclusive), clamped to `total`.
    pub fn end(&self, total: usize) -> usize {
        (self.offset + self.height).min(total)
    }
}

/// Compute the new scroll offset that keeps `cursor` inside
/// `[offset, offset + height)`, moving as little as possible.
pub fn reposition(cursor: usize, offset: usize, height: usize) -> usize {
    let height = height.max(1);
    if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    }
}

/// List window height for a terminal with `terminal_rows` rows.
pub fn viewport_height(terminal_rows: u16) -> usize {
    (terminal_rows.saturating_sub(CHROME_ROWS) as usize).max(MIN_VIEWPORT_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reposition_keeps_offset_when_cursor_visible() {
        assert_eq!(reposition(3, 0, 5), 0);
        assert_eq!(reposition(4, 0, 5), 0);
        assert_eq!(reposition(7, 5, 5), 5);
    }

    #[test]
    fn reposition_scrolls_up_to_cursor() {
        assert_eq!(reposition(2, 5, 5), 2);
        assert_eq!(reposition(0, 9, 5), 0);
    }

    #[test]
    fn reposition_scrolls_down_to_cursor() {
        assert_eq!(reposition(5, 0, 5), 1);
        assert_eq!(reposition(12, 0, 5), 8);
    }

    #[test]
    fn reposition_zero_height_treated_as_one() {
        assert_eq!(reposition(4, 0, 0), 4);
    }

    #[test]
    fn height_has_floor_on_tiny_terminals() {
        assert_eq!(viewport_height(24), 18);
        assert_eq!(viewport_height(11), 5);
        assert_eq!(viewport_height(8), MIN_VIEWPORT_ROWS);
        assert_eq!(viewport_height(0), MIN_VIEWPORT_ROWS);
    }

    #[test]
    fn follow_and_end() {
        let mut vp = Viewport::new(3);
        vp.follow(6);
        assert_eq!(vp.offset, 4);
        assert_eq!(vp.end(10), 7);
        assert_eq!(vp.end(5), 5);
    }
}
