use store::{SortColumn, SortDirection, User};

/// Presentation state of the user table: sort indicator, pagination,
/// expanded row and search box contents.
///
/// Holds no user data. Ordering and filtering are done by the caller; this
/// only decides which slice of the caller's list is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    sort_column: SortColumn,
    direction: SortDirection,
    page: usize,
    page_size: usize,
    expanded: Option<String>,
    search: String,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort_column: SortColumn::Name,
            direction: SortDirection::Asc,
            page: 0,
            page_size: page_size.max(1),
            expanded: None,
            search: String::new(),
        }
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Header click on `column`. Repeated clicks toggle the direction; a new
    /// column starts ascending. Returns the order the caller should apply.
    pub fn request_sort(&mut self, column: SortColumn) -> (SortDirection, SortColumn) {
        self.direction = if self.sort_column == column {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        };
        self.sort_column = column;
        (self.direction, column)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Store the search box text and return it for forwarding.
    pub fn set_search(&mut self, text: String) -> String {
        self.search = text;
        self.search.clone()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The requested page, pulled back onto the last page when the list has
    /// shrunk underneath it.
    pub fn current_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total).saturating_sub(1))
    }

    pub fn has_prev(&self, total: usize) -> bool {
        self.current_page(total) > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page(total) + 1 < self.page_count(total)
    }

    pub fn prev_page(&mut self, total: usize) {
        self.page = self.current_page(total).saturating_sub(1);
    }

    pub fn next_page(&mut self, total: usize) {
        if self.has_next(total) {
            self.page = self.current_page(total) + 1;
        }
    }

    /// Rows on the current page: `[page * size, page * size + size)`.
    pub fn visible<'a>(&self, users: &'a [User]) -> &'a [User] {
        let start = self.current_page(users.len()) * self.page_size;
        let end = (start + self.page_size).min(users.len());
        &users[start.min(end)..end]
    }

    /// Footer text, e.g. `"6–10 of 12"`.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let start = self.current_page(total) * self.page_size;
        let end = (start + self.page_size).min(total);
        format!("{}–{} of {}", start + 1, end, total)
    }

    /// Expand the row for `id`, or collapse it if it is already open.
    /// At most one row is expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: i.to_string(),
                ..User::default()
            })
            .collect()
    }

    fn ids(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_pagination_slices() {
        let list = users(12);
        let mut table = TableState::new(5);

        assert_eq!(table.page_count(12), 3);
        assert_eq!(ids(table.visible(&list)), vec!["0", "1", "2", "3", "4"]);

        table.set_page(1);
        assert_eq!(ids(table.visible(&list)), vec!["5", "6", "7", "8", "9"]);
        assert_eq!(table.range_label(12), "6–10 of 12");

        table.set_page(2);
        assert_eq!(ids(table.visible(&list)), vec!["10", "11"]);
        assert!(!table.has_next(12));
        assert!(table.has_prev(12));
    }

    #[test]
    fn test_changing_page_size_resets_page() {
        let mut table = TableState::new(5);
        table.set_page(2);
        table.set_page_size(10);
        assert_eq!(table.current_page(12), 0);
        assert_eq!(table.page_size(), 10);
    }

    #[test]
    fn test_page_is_clamped_when_list_shrinks() {
        let mut table = TableState::new(5);
        table.set_page(2);

        let list = users(7);
        assert_eq!(table.current_page(7), 1);
        assert_eq!(ids(table.visible(&list)), vec!["5", "6"]);

        assert!(table.visible(&[]).is_empty());
        assert_eq!(table.range_label(0), "0–0 of 0");
    }

    #[test]
    fn test_prev_and_next() {
        let mut table = TableState::new(5);
        table.next_page(12);
        table.next_page(12);
        table.next_page(12);
        assert_eq!(table.current_page(12), 2);

        table.prev_page(12);
        assert_eq!(table.current_page(12), 1);
        table.prev_page(12);
        table.prev_page(12);
        assert_eq!(table.current_page(12), 0);
    }

    #[test]
    fn test_sort_toggle() {
        let mut table = TableState::new(5);

        // Name starts ascending, so the first click on it flips to descending
        assert_eq!(
            table.request_sort(SortColumn::Name),
            (SortDirection::Desc, SortColumn::Name)
        );
        assert_eq!(
            table.request_sort(SortColumn::Name),
            (SortDirection::Asc, SortColumn::Name)
        );

        table.request_sort(SortColumn::Email);
        assert_eq!(
            table.request_sort(SortColumn::Email),
            (SortDirection::Desc, SortColumn::Email)
        );
        // Switching column resets to ascending
        assert_eq!(
            table.request_sort(SortColumn::Gender),
            (SortDirection::Asc, SortColumn::Gender)
        );
        assert_eq!(table.sort_column(), SortColumn::Gender);
    }

    #[test]
    fn test_single_expanded_row() {
        let mut table = TableState::new(5);
        table.toggle_expanded("a");
        assert!(table.is_expanded("a"));

        table.toggle_expanded("b");
        assert!(table.is_expanded("b"));
        assert!(!table.is_expanded("a"));

        table.toggle_expanded("b");
        assert!(!table.is_expanded("b"));
    }

    #[test]
    fn test_search_text_forwarded_verbatim() {
        let mut table = TableState::new(5);
        assert_eq!(table.set_search("GMail ".to_string()), "GMail ");
        assert_eq!(table.search(), "GMail ");
    }
}
