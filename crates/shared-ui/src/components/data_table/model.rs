//! Headless state and derivation for [`DataTable`](super::DataTable).
//!
//! Everything here is a pure function of the input rows plus the table's
//! local UI state. The displayed row set is always
//! `sort(search(rows))`, recomputed on each render; the input slice is never
//! reordered or mutated.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// A value projected out of a row for searching and sorting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing field. Searches as the empty string, sorts first.
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Rank used to order values of different kinds against each other.
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Total order over projected values.
    ///
    /// Numbers compare numerically (ints and floats together), text
    /// lexicographically, booleans `false < true`. Values of different kinds
    /// order as `Empty < Bool < number < Text`.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64).total_cmp(b),
            (CellValue::Float(a), CellValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => CellValue::Int(n),
            Err(_) => CellValue::Float(value as f64),
        }
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::from(value as u64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or_default(),
            },
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Resolve a dot-separated path (`"profile.first_name"`, `"tags.0"`)
/// against a JSON value. Any missing segment yields [`CellValue::Empty`].
pub fn resolve_path(value: &serde_json::Value, path: &str) -> CellValue {
    let mut current = value;
    for segment in path.split('.') {
        let next = match current {
            serde_json::Value::Object(map) => map.get(segment),
            serde_json::Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            _ => None,
        };
        match next {
            Some(v) => current = v,
            None => return CellValue::Empty,
        }
    }
    CellValue::from(current)
}

/// Closure taking a row, compared by pointer identity so it can live in
/// component props.
pub struct RowFn<T, R>(Rc<dyn Fn(&T) -> R>);

impl<T, R> RowFn<T, R> {
    pub fn new(f: impl Fn(&T) -> R + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, row: &T) -> R {
        (self.0)(row)
    }
}

impl<T, R> Clone for RowFn<T, R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T, R> PartialEq for RowFn<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Per-row action menu content.
pub type RowActions<T> = RowFn<T, Element>;

/// How one field of a row is projected, labelled and rendered.
pub struct Column<T> {
    key: String,
    label: String,
    accessor: RowFn<T, CellValue>,
    render: Option<RowFn<T, Element>>,
    text: Option<RowFn<T, String>>,
    width: Option<String>,
    sortable: bool,
}

impl<T> Column<T> {
    /// A sortable column projecting each row through `accessor`.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            accessor: RowFn::new(accessor),
            render: None,
            text: None,
            width: None,
            sortable: true,
        }
    }

    /// Render cells with `render` instead of the cell text. Search still
    /// uses [`Column::cell_text`] and sort the projected value.
    pub fn render(mut self, render: impl Fn(&T) -> Element + 'static) -> Self {
        self.render = Some(RowFn::new(render));
        self
    }

    /// Display text used for search, plain rendering and export in place of
    /// the projected value's text. Sorting still uses the projected value,
    /// so a date can sort by timestamp yet match "Jan 20".
    pub fn text(mut self, text: impl Fn(&T) -> String + 'static) -> Self {
        self.text = Some(RowFn::new(text));
        self
    }

    /// Fixed CSS width, e.g. `"120px"` or `"10%"`.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn width_style(&self) -> String {
        match &self.width {
            Some(w) => format!("width: {w};"),
            None => String::new(),
        }
    }

    pub fn project(&self, row: &T) -> CellValue {
        self.accessor.call(row)
    }

    /// Text a reader sees for this cell.
    pub fn cell_text(&self, row: &T) -> String {
        match &self.text {
            Some(text) => text.call(row),
            None => self.project(row).to_string(),
        }
    }

    pub fn render_cell(&self, row: &T) -> Element {
        match &self.render {
            Some(render) => render.call(row),
            None => {
                let text = self.cell_text(row);
                rsx! { "{text}" }
            }
        }
    }
}

impl Column<serde_json::Value> {
    /// Column over JSON rows whose key is a dot-path into the row.
    pub fn path(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        let path = key.clone();
        Self::new(key, label, move |row: &serde_json::Value| {
            resolve_path(row, &path)
        })
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            accessor: self.accessor.clone(),
            render: self.render.clone(),
            text: self.text.clone(),
            width: self.width.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.width == other.width
            && self.sortable == other.sortable
            && self.accessor == other.accessor
            && self.render == other.render
            && self.text == other.text
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Value for the header's `aria-sort` attribute.
    pub fn aria(&self) -> &'static str {
        match self {
            SortDirection::Unsorted => "none",
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Single active sort column with a tri-state direction.
///
/// `column` is `None` exactly when `direction` is `Unsorted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction shown on the header of `key`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.column {
            Some(active) if active == key => self.direction,
            _ => SortDirection::Unsorted,
        }
    }

    /// State after a click on the header of `key`.
    ///
    /// A new column starts ascending; the active column goes
    /// ascending → descending → unsorted.
    pub fn next(&self, key: &str) -> Self {
        match (&self.column, self.direction) {
            (Some(active), SortDirection::Ascending) if active == key => Self {
                column: Some(key.to_string()),
                direction: SortDirection::Descending,
            },
            (Some(active), SortDirection::Descending) if active == key => Self::default(),
            _ => Self {
                column: Some(key.to_string()),
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn toggle(&mut self, key: &str) {
        *self = self.next(key);
    }
}

/// Whether any column of `row` contains `term`, ignoring case and
/// surrounding whitespace. A blank term matches every row.
pub fn row_matches<T>(row: &T, columns: &[Column<T>], term: &str) -> bool {
    let needle = normalize_term(term);
    needle.is_empty() || matches_needle(row, columns, &needle)
}

/// Indices of rows matching `term`, in input order.
pub fn filter_rows<T>(rows: &[T], columns: &[Column<T>], term: &str) -> Vec<usize> {
    let needle = normalize_term(term);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| needle.is_empty() || matches_needle(*row, columns, &needle))
        .map(|(i, _)| i)
        .collect()
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Any column of `row` contains the already normalized `needle`.
fn matches_needle<T>(row: &T, columns: &[Column<T>], needle: &str) -> bool {
    columns
        .iter()
        .any(|column| column.cell_text(row).to_lowercase().contains(needle))
}

/// Stable-sort `indices` by the active sort column. Equal values keep their
/// relative order in both directions. No-op when unsorted or when the active
/// key names no sortable column.
pub fn sort_indices<T>(
    rows: &[T],
    indices: &mut Vec<usize>,
    columns: &[Column<T>],
    sort: &SortState,
) {
    let Some(active) = sort.column() else {
        return;
    };
    let Some(column) = columns
        .iter()
        .find(|c| c.key() == active && c.is_sortable())
    else {
        return;
    };
    let descending = match sort.direction() {
        SortDirection::Unsorted => return,
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
    };

    let mut keyed: Vec<(usize, CellValue)> = indices
        .iter()
        .map(|&i| (i, column.project(&rows[i])))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| {
        let ord = a.compare(b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    *indices = keyed.into_iter().map(|(i, _)| i).collect();
}

/// Indices of the rows to display, in display order.
pub fn derive_rows<T>(
    rows: &[T],
    columns: &[Column<T>],
    term: &str,
    sort: &SortState,
) -> Vec<usize> {
    let mut indices = filter_rows(rows, columns, term);
    sort_indices(rows, &mut indices, columns, sort);
    indices
}

/// Externally owned pagination position. The table only displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based current page.
    pub page: u64,
    pub limit: u64,
    /// Server-side total row count.
    pub total: u64,
}

impl PaginationState {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// `ceil(total / limit)`. A zero limit is treated as one page.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return u64::from(self.total > 0);
        }
        self.total.div_ceil(self.limit)
    }

    /// Page used for display and navigation. Page 0 is treated as page 1.
    pub fn effective_page(&self) -> u64 {
        self.page.max(1)
    }

    /// Zero-based offset and exclusive end of this page's rows, `None` when
    /// the page holds no rows. A zero limit puts every row on page 1.
    fn bounds(&self) -> Option<(u64, u64)> {
        let page = self.effective_page();
        let (offset, end) = if self.limit == 0 {
            if page > 1 {
                return None;
            }
            (0, self.total)
        } else {
            let offset = (page - 1).saturating_mul(self.limit);
            (offset, offset.saturating_add(self.limit).min(self.total))
        };
        (offset < end).then_some((offset, end))
    }

    /// 1-based index of the first row on this page, 0 when the page is empty.
    pub fn first_item(&self) -> u64 {
        self.bounds().map_or(0, |(offset, _)| offset + 1)
    }

    /// 1-based index of the last row on this page, 0 when the page is empty.
    pub fn last_item(&self) -> u64 {
        self.bounds().map_or(0, |(_, end)| end)
    }

    pub fn range_text(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_item(),
            self.last_item(),
            self.total
        )
    }

    pub fn has_previous(&self) -> bool {
        self.effective_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page() < self.total_pages()
    }

    pub fn previous_page(&self) -> u64 {
        self.effective_page().saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u64 {
        self.effective_page().saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Vendor {
        name: &'static str,
        city: &'static str,
        rating: f64,
        bookings: i64,
        email: Option<&'static str>,
    }

    fn vendors() -> Vec<Vendor> {
        vec![
            Vendor {
                name: "Lumen Catering",
                city: "Austin",
                rating: 4.5,
                bookings: 120,
                email: Some("hi@lumen.example"),
            },
            Vendor {
                name: "Golden Hour Photo",
                city: "Denver",
                rating: 4.9,
                bookings: 45,
                email: None,
            },
            Vendor {
                name: "Bassline DJs",
                city: "austin",
                rating: 3.8,
                bookings: 300,
                email: Some("book@bassline.example"),
            },
            Vendor {
                name: "Petal & Stem",
                city: "Portland",
                rating: 4.2,
                bookings: 80,
                email: None,
            },
        ]
    }

    fn columns() -> Vec<Column<Vendor>> {
        vec![
            Column::new("name", "Name", |v: &Vendor| v.name.into()),
            Column::new("city", "City", |v: &Vendor| v.city.into()),
            Column::new("rating", "Rating", |v: &Vendor| v.rating.into()),
            Column::new("bookings", "Bookings", |v: &Vendor| v.bookings.into()),
            Column::new("email", "Email", |v: &Vendor| v.email.into()).sortable(false),
        ]
    }

    fn names(rows: &[Vendor], indices: &[usize]) -> Vec<&'static str> {
        indices.iter().map(|&i| rows[i].name).collect()
    }

    #[test]
    fn empty_term_keeps_every_row_in_order() {
        let rows = vendors();
        assert_eq!(filter_rows(&rows, &columns(), ""), vec![0, 1, 2, 3]);
        assert_eq!(filter_rows(&rows, &columns(), "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let rows = vendors();
        let found = filter_rows(&rows, &columns(), "  AUSTIN ");
        assert_eq!(names(&rows, &found), vec!["Lumen Catering", "Bassline DJs"]);
    }

    #[test]
    fn search_matches_numbers_as_text() {
        let rows = vendors();
        let found = filter_rows(&rows, &columns(), "4.9");
        assert_eq!(names(&rows, &found), vec!["Golden Hour Photo"]);
    }

    #[test]
    fn retained_rows_match_and_excluded_rows_do_not() {
        let rows = vendors();
        let cols = columns();
        for term in ["lumen", "o", "example", "zzz", "30"] {
            let kept = filter_rows(&rows, &cols, term);
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(kept.contains(&i), row_matches(row, &cols, term), "{term}");
            }
        }
    }

    #[test]
    fn missing_values_do_not_match_placeholder_text() {
        let rows = vendors();
        assert!(filter_rows(&rows, &columns(), "undefined").is_empty());
        assert!(filter_rows(&rows, &columns(), "none").is_empty());
    }

    #[test]
    fn non_empty_term_with_no_columns_matches_nothing() {
        let rows = vendors();
        assert!(filter_rows(&rows, &[], "lumen").is_empty());
        assert_eq!(filter_rows(&rows, &[], "").len(), 4);
    }

    #[test]
    fn sort_state_cycles_through_three_states() {
        let mut state = SortState::default();
        state.toggle("name");
        assert_eq!(state.column(), Some("name"));
        assert_eq!(state.direction(), SortDirection::Ascending);
        state.toggle("name");
        assert_eq!(state.direction(), SortDirection::Descending);
        state.toggle("name");
        assert_eq!(state, SortState::default());
        assert_eq!(state.column(), None);
    }

    #[test]
    fn selecting_another_column_restarts_ascending() {
        let mut state = SortState::default();
        state.toggle("name");
        state.toggle("name");
        state.toggle("city");
        assert_eq!(state.column(), Some("city"));
        assert_eq!(state.direction(), SortDirection::Ascending);
        assert_eq!(state.direction_for("name"), SortDirection::Unsorted);
        assert_eq!(state.direction_for("city").aria(), "ascending");
    }

    #[test]
    fn ascending_and_descending_are_reverses() {
        let rows = vendors();
        let cols = columns();
        let mut state = SortState::default();
        state.toggle("bookings");
        let asc = derive_rows(&rows, &cols, "", &state);
        state.toggle("bookings");
        let desc = derive_rows(&rows, &cols, "", &state);
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
        assert_eq!(
            names(&rows, &asc),
            vec!["Golden Hour Photo", "Petal & Stem", "Lumen Catering", "Bassline DJs"]
        );
    }

    #[test]
    fn three_clicks_restore_original_order() {
        let rows = vendors();
        let cols = columns();
        let original = derive_rows(&rows, &cols, "a", &SortState::default());
        let mut state = SortState::default();
        for _ in 0..3 {
            state.toggle("rating");
        }
        assert_eq!(derive_rows(&rows, &cols, "a", &state), original);
    }

    #[test]
    fn text_sorts_lexicographically() {
        let rows = vendors();
        let mut state = SortState::default();
        state.toggle("name");
        let sorted = derive_rows(&rows, &columns(), "", &state);
        assert_eq!(
            names(&rows, &sorted),
            vec!["Bassline DJs", "Golden Hour Photo", "Lumen Catering", "Petal & Stem"]
        );
    }

    #[test]
    fn equal_values_keep_relative_order_in_both_directions() {
        let rows = vec![("a", 1i64), ("b", 2), ("c", 1), ("d", 2)];
        let cols = vec![Column::new("n", "N", |r: &(&str, i64)| r.1.into())];
        let mut state = SortState::default();
        state.toggle("n");
        assert_eq!(derive_rows(&rows, &cols, "", &state), vec![0, 2, 1, 3]);
        state.toggle("n");
        assert_eq!(derive_rows(&rows, &cols, "", &state), vec![1, 3, 0, 2]);
    }

    #[test]
    fn unsortable_or_unknown_column_leaves_order_alone() {
        let rows = vendors();
        let mut state = SortState::default();
        state.toggle("email");
        assert_eq!(derive_rows(&rows, &columns(), "", &state), vec![0, 1, 2, 3]);
        let mut state = SortState::default();
        state.toggle("missing");
        assert_eq!(derive_rows(&rows, &columns(), "", &state), vec![0, 1, 2, 3]);
    }

    #[test]
    fn search_then_clear_returns_sorted_full_set() {
        let rows = vendors();
        let cols = columns();
        let mut state = SortState::default();
        state.toggle("rating");
        let before = derive_rows(&rows, &cols, "", &state);
        let filtered = derive_rows(&rows, &cols, "austin", &state);
        assert_eq!(filtered.len(), 2);
        assert_eq!(derive_rows(&rows, &cols, "", &state), before);
    }

    #[test]
    fn derive_does_not_mutate_input() {
        let rows = vendors();
        let snapshot = rows.clone();
        let mut state = SortState::default();
        state.toggle("name");
        let _ = derive_rows(&rows, &columns(), "o", &state);
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn mixed_kinds_have_a_total_order() {
        let values = [
            CellValue::Text("b".into()),
            CellValue::Int(3),
            CellValue::Empty,
            CellValue::Float(2.5),
            CellValue::Bool(true),
        ];
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.compare(b));
        assert_eq!(
            sorted,
            vec![
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::Float(2.5),
                CellValue::Int(3),
                CellValue::Text("b".into()),
            ]
        );
    }

    #[test]
    fn resolve_path_walks_objects_and_arrays() {
        let row = serde_json::json!({
            "profile": { "first_name": "Ada", "tags": ["vip", "early"] },
            "age": 36
        });
        assert_eq!(resolve_path(&row, "profile.first_name"), CellValue::Text("Ada".into()));
        assert_eq!(resolve_path(&row, "profile.tags.1"), CellValue::Text("early".into()));
        assert_eq!(resolve_path(&row, "age"), CellValue::Int(36));
        assert_eq!(resolve_path(&row, "profile.last_name"), CellValue::Empty);
        assert_eq!(resolve_path(&row, "age.years"), CellValue::Empty);
    }

    #[test]
    fn path_columns_search_nested_fields() {
        let rows = vec![
            serde_json::json!({ "profile": { "name": "Ada" } }),
            serde_json::json!({ "profile": { "name": "Grace" } }),
            serde_json::json!({}),
        ];
        let cols = vec![Column::path("profile.name", "Name")];
        assert_eq!(filter_rows(&rows, &cols, "grace"), vec![1]);
        let mut state = SortState::default();
        state.toggle("profile.name");
        assert_eq!(derive_rows(&rows, &cols, "", &state), vec![2, 0, 1]);
    }

    #[test]
    fn search_uses_display_text_while_sort_uses_value() {
        let rows = vendors();
        let tier = |v: &Vendor| if v.bookings >= 100 { "Busy" } else { "Quiet" }.to_string();
        let cols =
            vec![Column::new("bookings", "Bookings", |v: &Vendor| v.bookings.into()).text(tier)];
        assert_eq!(cols[0].cell_text(&rows[0]), "Busy");
        assert_eq!(filter_rows(&rows, &cols, "quiet"), vec![1, 3]);
        assert!(filter_rows(&rows, &cols, "120").is_empty());
        let mut state = SortState::default();
        state.toggle("bookings");
        assert_eq!(derive_rows(&rows, &cols, "", &state), vec![1, 3, 0, 2]);
        assert_eq!(derive_rows(&rows, &cols, "busy", &state), vec![0, 2]);
    }

    #[test]
    fn column_clone_is_equal() {
        let col = Column::new("name", "Name", |v: &Vendor| v.name.into()).width("200px");
        assert_eq!(col.clone(), col);
        assert_eq!(col.width_style(), "width: 200px;");
        let other = Column::new("name", "Name", |v: &Vendor| v.name.into()).width("200px");
        assert!(col != other);
    }

    #[test]
    fn pagination_middle_page() {
        let p = PaginationState::new(2, 10, 25);
        assert_eq!(p.range_text(), "Showing 11 to 20 of 25 entries");
        assert!(p.has_previous());
        assert!(p.has_next());
    }

    #[test]
    fn pagination_last_page() {
        let p = PaginationState::new(3, 10, 25);
        assert_eq!(p.range_text(), "Showing 21 to 25 of 25 entries");
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn pagination_first_page_and_empty() {
        let p = PaginationState::new(1, 10, 25);
        assert!(!p.has_previous());
        let empty = PaginationState::new(1, 10, 0);
        assert_eq!(empty.range_text(), "Showing 0 to 0 of 0 entries");
        assert!(!empty.has_next());
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn pagination_out_of_range_page_shows_nothing() {
        let p = PaginationState::new(9, 10, 25);
        assert_eq!(p.range_text(), "Showing 0 to 0 of 25 entries");
        assert!(!p.has_next());
    }

    #[test]
    fn pagination_zero_limit_is_one_page() {
        let p = PaginationState::new(1, 0, 5);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.has_next());
        assert_eq!(p.range_text(), "Showing 1 to 5 of 5 entries");
        assert_eq!(
            PaginationState::new(2, 0, 5).range_text(),
            "Showing 0 to 0 of 5 entries"
        );
    }

    #[test]
    fn pagination_page_zero_reads_as_first_page() {
        let p = PaginationState::new(0, 10, 25);
        assert_eq!(p.range_text(), "Showing 1 to 10 of 25 entries");
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.next_page(), 2);
        assert_eq!(p.previous_page(), 1);
    }

    #[test]
    fn pagination_range_is_never_inverted() {
        for page in 0..5 {
            for limit in [0, 1, 3, 10] {
                for total in [0, 1, 5, 25] {
                    let p = PaginationState::new(page, limit, total);
                    let (first, last) = (p.first_item(), p.last_item());
                    assert!(first <= last, "{p:?}");
                    assert_eq!(first == 0, last == 0, "{p:?}");
                    assert!(last <= total, "{p:?}");
                }
            }
        }
    }
}
