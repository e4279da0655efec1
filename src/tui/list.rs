use super::grouping::{Projection, Row};
use super::viewport::{MIN_VIEWPORT_ROWS, Viewport, reposition};

/// What the list core needs to know about an item to lay it out.
pub trait ListItem {
    /// Full display string; also the sort key inside a group.
    fn display(&self) -> &str;

    /// Grouping key for the grouped view. `None` renders the item at the top
    /// level without a header.
    fn group_key(&self) -> Option<&str> {
        None
    }

    /// Label shown under a group header.
    fn leaf_label(&self) -> &str {
        self.display()
    }
}

/// How the list is projected onto rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Flat,
    Grouped,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Flat => ViewMode::Grouped,
            ViewMode::Grouped => ViewMode::Flat,
        }
    }
}

/// The slice of rows to draw plus how many rows are hidden on each side.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub rows: &'a [Row],
    /// First row of `rows` in projection coordinates
    pub start: usize,
    pub above: usize,
    pub below: usize,
}

/// Cursor, scroll window and view mode shared by every list session.
///
/// The cursor is an original item index; the viewport works in render-row
/// coordinates of the active projection.
#[derive(Debug, Clone)]
pub struct ListState {
    len: usize,
    cursor: usize,
    viewport: Viewport,
    view: ViewMode,
    flat: Projection,
    /// Built the first time the grouped view is shown
    grouped: Option<Projection>,
}

impl ListState {
    pub fn new<I: ListItem>(items: &[I]) -> Self {
        ListState {
            len: items.len(),
            cursor: 0,
            viewport: Viewport::new(MIN_VIEWPORT_ROWS),
            view: ViewMode::Flat,
            flat: Projection::flat(items),
            grouped: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The projection for the current view mode.
    pub fn projection(&self) -> &Projection {
        match (self.view, &self.grouped) {
            (ViewMode::Grouped, Some(grouped)) => grouped,
            _ => &self.flat,
        }
    }

    /// Render row of the cursor item in the current projection.
    pub fn cursor_row(&self) -> usize {
        self.projection().row_of(self.cursor).unwrap_or(0)
    }

    /// Move the cursor by `delta` items, clamped to the list bounds.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = self.len as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
        self.viewport.follow(self.cursor_row());
    }

    /// Flip between flat and grouped views. The scroll offset is derived
    /// again from the cursor's row in the new projection.
    pub fn toggle_view<I: ListItem>(&mut self, items: &[I]) {
        self.view = self.view.toggled();
        if self.view == ViewMode::Grouped && self.grouped.is_none() {
            self.grouped = Some(Projection::grouped(items));
        }
        self.viewport.offset = reposition(self.cursor_row(), 0, self.viewport.height);
    }

    /// Apply a new window height (terminal resize) and keep the cursor visible.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.height = height.max(1);
        self.viewport.follow(self.cursor_row());
    }

    /// Rows inside the viewport.
    pub fn window(&self) -> Window<'_> {
        let rows = self.projection().rows();
        let start = self.viewport.offset.min(rows.len());
        let end = self.viewport.end(rows.len()).max(start);
        Window {
            rows: &rows[start..end],
            start,
            above: start,
            below: rows.len() - end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name(String);

    impl ListItem for Name {
        fn display(&self) -> &str {
            &self.0
        }

        fn group_key(&self) -> Option<&str> {
            self.0.rsplit_once('/').map(|(dir, _)| dir)
        }
    }

    fn names(n: usize) -> Vec<Name> {
        (0..n).map(|i| Name(format!("d{}/f{:02}", i % 3, i))).collect()
    }

    fn assert_cursor_visible(list: &ListState) {
        let vp = list.viewport();
        let row = list.cursor_row();
        assert!(
            vp.offset <= row && row < vp.offset + vp.height,
            "row {} outside [{}, {})",
            row,
            vp.offset,
            vp.offset + vp.height
        );
    }

    #[test]
    fn move_clamps_without_wrapping() {
        let items = names(4);
        let mut list = ListState::new(&items);
        list.move_cursor(-1);
        assert_eq!(list.cursor(), 0);
        list.move_cursor(10);
        assert_eq!(list.cursor(), 3);
        list.move_cursor(1);
        assert_eq!(list.cursor(), 3);
        list.move_cursor(-2);
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn viewport_follows_every_move() {
        let items = names(20);
        let mut list = ListState::new(&items);
        list.set_height(4);
        for _ in 0..19 {
            list.move_cursor(1);
            assert_cursor_visible(&list);
        }
        assert_eq!(list.viewport().offset, 16);
        for _ in 0..19 {
            list.move_cursor(-1);
            assert_cursor_visible(&list);
        }
        assert_eq!(list.viewport().offset, 0);
    }

    #[test]
    fn toggle_view_keeps_cursor_and_reanchors() {
        let items = names(20);
        let mut list = ListState::new(&items);
        list.set_height(5);
        list.move_cursor(17);
        let cursor = list.cursor();

        list.toggle_view(&items);
        assert_eq!(list.view(), ViewMode::Grouped);
        assert_eq!(list.cursor(), cursor);
        assert_cursor_visible(&list);

        // Moving inside the grouped view still keeps the cursor row visible
        for delta in [-1, -5, 3, 9, -20, 20] {
            list.move_cursor(delta);
            assert_cursor_visible(&list);
        }

        list.toggle_view(&items);
        assert_eq!(list.view(), ViewMode::Flat);
        assert_cursor_visible(&list);
    }

    #[test]
    fn window_reports_hidden_rows() {
        let items = names(10);
        let mut list = ListState::new(&items);
        list.set_height(4);
        list.move_cursor(5);
        let w = list.window();
        assert_eq!(w.start, 2);
        assert_eq!(w.rows.len(), 4);
        assert_eq!(w.above, 2);
        assert_eq!(w.below, 4);
    }

    #[test]
    fn resize_keeps_cursor_visible() {
        let items = names(30);
        let mut list = ListState::new(&items);
        list.set_height(20);
        list.move_cursor(19);
        list.set_height(5);
        assert_cursor_visible(&list);
    }

    #[test]
    fn empty_list_moves_are_noops() {
        let items: Vec<Name> = Vec::new();
        let mut list = ListState::new(&items);
        list.move_cursor(1);
        assert_eq!(list.cursor(), 0);
        assert!(list.window().rows.is_empty());
    }
}
