//! Pure state and value logic behind [`DataTable`](super::DataTable).
//!
//! Rows are untyped JSON objects straight from the API; none of the
//! operations here may panic, whatever shape the data arrives in.
//! Everything is synchronous and side-effect free, so the whole module
//! is testable off-wasm.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Rendered in place of an empty cell value.
pub const PLACEHOLDER: &str = "-";

/// Field checked first when deriving a row's identity.
const ID_FIELD: &str = "id";
/// Domain fallback identity field for RMA/stock rows.
const SERIAL_FIELD: &str = "Serial_No";

static NULL: Value = Value::Null;

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How a cell value is turned into display text.
#[derive(Clone)]
pub enum CellFormat {
    /// Resolved value as text, with [`PLACEHOLDER`] for empty values.
    Plain,
    /// Locale-style date rendering; unparseable values fall back to raw text.
    Date,
    /// Caller-supplied formatter. Its output is used verbatim, even when
    /// empty, and it sees both the resolved value and the whole row.
    Custom(Arc<dyn Fn(&Value, &Value) -> String + Send + Sync>),
}

impl fmt::Debug for CellFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellFormat::Plain => f.write_str("Plain"),
            CellFormat::Date => f.write_str("Date"),
            CellFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Column descriptor supplied by the page. `key` is a dot-delimited path
/// into the row object and must be unique within one table.
#[derive(Clone, Debug)]
pub struct Column {
    pub key: String,
    pub title: String,
    /// `None` defers to the table-wide `sortable` flag; `Some(false)`
    /// force-disables sorting for this column.
    pub sortable: Option<bool>,
    pub align: Option<Align>,
    pub width: Option<String>,
    pub format: CellFormat,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: None,
            align: None,
            width: None,
            format: CellFormat::Plain,
        }
    }

    pub fn date(mut self) -> Self {
        self.format = CellFormat::Date;
        self
    }

    pub fn custom(
        mut self,
        formatter: impl Fn(&Value, &Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format = CellFormat::Custom(Arc::new(formatter));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = Some(false);
        self
    }
}

/// Column-level override wins over the table-wide default.
pub fn is_column_sortable(table_sortable: bool, column: &Column) -> bool {
    table_sortable && column.sortable != Some(false)
}

// ---------------------------------------------------------------------------
// Value resolution and formatting
// ---------------------------------------------------------------------------

/// Walks `key` dot segment by segment into `row`. Any absent segment or
/// non-object intermediate short-circuits to the null sentinel; this never
/// fails, whatever the row looks like. Segments are object keys only: a
/// numeric segment does not index into an array.
pub fn resolve<'a>(row: &'a Value, key: &str) -> &'a Value {
    let mut current = row;
    for segment in key.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return &NULL,
        }
    }
    current
}

/// Empty/zero-ish values render as the placeholder: null, `false`, `0`,
/// and the empty string.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Plain text for a resolved value. Strings are taken as-is; everything
/// else goes through its JSON rendering.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_date_text(raw: &str) -> Option<String> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format("%Y/%m/%d").to_string());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y/%m/%d").to_string());
    }
    None
}

/// Display string for one cell. Pure in `(row, column)`; never fails.
///
/// A custom formatter's result is authoritative: no placeholder
/// substitution is applied to it. Date columns swallow parse failures and
/// fall back to the raw resolved text.
pub fn display_value(row: &Value, column: &Column) -> String {
    let value = resolve(row, &column.key);
    match &column.format {
        CellFormat::Custom(formatter) => formatter(value, row),
        CellFormat::Date => {
            if is_empty_value(value) {
                return PLACEHOLDER.to_string();
            }
            let raw = value_text(value);
            format_date_text(&raw).unwrap_or(raw)
        }
        CellFormat::Plain => {
            if is_empty_value(value) {
                PLACEHOLDER.to_string()
            } else {
                value_text(value)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSort {
    pub key: String,
    pub direction: SortDirection,
}

/// Tri-state sort: at most one active column, cycling
/// unsorted -> ascending -> descending -> unsorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub active: Option<ActiveSort>,
}

impl SortState {
    /// Advances the cycle for `key`. Toggling a different column discards
    /// the previous column's state and starts the new one ascending.
    pub fn toggle(&mut self, key: &str) {
        self.active = match self.active.take() {
            Some(active) if active.key == key => match active.direction {
                SortDirection::Ascending => Some(ActiveSort {
                    key: active.key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(ActiveSort {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|active| active.key == key)
            .map(|active| active.direction)
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.direction_for(key).is_some()
    }
}

/// Three-way ordering over arbitrary resolved values. Same-type values
/// compare naturally; mixed types fall back to a fixed type rank so the
/// sort stays total and deterministic.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Row plus the index it had in the caller's unsorted collection.
///
/// The source index travels with the row through every re-sort, so a
/// positional identity stays attached to the same logical row whatever
/// ordering is currently displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub source_index: usize,
    pub row: Value,
}

impl DisplayRow {
    /// Row identity: `id` if present and non-empty, else `Serial_No`,
    /// else the source-collection index.
    pub fn key(&self) -> RowKey {
        derive_row_key(&self.row, self.source_index)
    }
}

/// Derived display collection. With no active sort the caller's order is
/// passed through untouched; otherwise a stable comparator sort runs over
/// a copy, so ties keep their original relative order and the caller's
/// collection is never mutated.
pub fn display_rows(rows: &[Value], sort: &SortState) -> Vec<DisplayRow> {
    let mut display: Vec<DisplayRow> = rows
        .iter()
        .cloned()
        .enumerate()
        .map(|(source_index, row)| DisplayRow { source_index, row })
        .collect();

    if let Some(active) = &sort.active {
        // Vec::sort_by is stable, which is exactly what ties need.
        display.sort_by(|a, b| {
            let ordering =
                compare_values(resolve(&a.row, &active.key), resolve(&b.row, &active.key));
            match active.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    display
}

/// Ordering-only view of [`display_rows`], for callers that do not need
/// carried identities.
pub fn sorted(rows: &[Value], sort: &SortState) -> Vec<Value> {
    display_rows(rows, sort).into_iter().map(|d| d.row).collect()
}

// ---------------------------------------------------------------------------
// Row identity and selection
// ---------------------------------------------------------------------------

/// Derived identity used to track selection across renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Text(String),
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Text(s) => f.write_str(s),
            RowKey::Index(i) => write!(f, "{i}"),
        }
    }
}

/// `row.id`, else `row.Serial_No`, else the positional index. Empty values
/// (null, "", 0) fall through to the next candidate, matching the caller's
/// habit of sending null-ish placeholders in untyped rows. Non-string
/// scalars are stringified.
pub fn derive_row_key(row: &Value, position: usize) -> RowKey {
    for field in [ID_FIELD, SERIAL_FIELD] {
        if let Some(value) = row.get(field) {
            if is_empty_value(value) {
                continue;
            }
            return RowKey::Text(value_text(value));
        }
    }
    RowKey::Index(position)
}

/// Ordered set of selected row identities. Order is click order, which is
/// what selection-change events carry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<RowKey>,
}

impl Selection {
    pub fn contains(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Adds the key, or removes it if already selected.
    pub fn toggle(&mut self, key: RowKey) {
        if let Some(position) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(position);
        } else {
            self.keys.push(key);
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[RowKey] {
        &self.keys
    }
}

/// Header-checkbox rendering state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Pure projection of the select-all aggregate: checked iff the selection
/// size equals the (non-zero) current row count.
pub fn select_all_state(rows: &[DisplayRow], selection: &Selection) -> SelectAllState {
    if selection.is_empty() || rows.is_empty() {
        SelectAllState::Unchecked
    } else if selection.len() == rows.len() {
        SelectAllState::Checked
    } else {
        SelectAllState::Indeterminate
    }
}

/// Replaces the whole selection: every identity of the rows passed in, or
/// nothing. Always call with the rows currently displayed; identities are
/// recomputed here, never cached, so a row collection swapped in between
/// renders cannot leak stale keys.
pub fn apply_select_all(rows: &[DisplayRow], checked: bool) -> Selection {
    if !checked {
        return Selection::default();
    }
    Selection {
        keys: rows.iter().map(DisplayRow::key).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // --- resolution ---

    #[test]
    fn resolve_walks_nested_paths() {
        let row = json!({"customer": {"name": "ACME", "site": {"city": "Taipei"}}});
        assert_eq!(*resolve(&row, "customer.name"), json!("ACME"));
        assert_eq!(*resolve(&row, "customer.site.city"), json!("Taipei"));
    }

    #[test]
    fn resolve_never_fails_on_missing_or_deep_paths() {
        let empty = json!({});
        assert_eq!(*resolve(&empty, "a.b.c"), Value::Null);

        let shallow = json!({"a": 1});
        assert_eq!(*resolve(&shallow, "a.b.c"), Value::Null);

        let nulled = json!({"a": {"b": null}});
        assert_eq!(*resolve(&nulled, "a.b.c"), Value::Null);

        let scalar = json!("not an object");
        assert_eq!(*resolve(&scalar, "a"), Value::Null);
    }

    #[test]
    fn resolve_does_not_index_arrays() {
        let row = json!({"items": ["first", "second"]});
        assert_eq!(*resolve(&row, "items.0"), Value::Null);
        assert_eq!(*resolve(&row, "items"), json!(["first", "second"]));
    }

    // --- formatting ---

    #[test]
    fn plain_format_substitutes_placeholder_for_empty_values() {
        let column = Column::new("v", "V");
        assert_eq!(display_value(&json!({}), &column), "-");
        assert_eq!(display_value(&json!({"v": null}), &column), "-");
        assert_eq!(display_value(&json!({"v": ""}), &column), "-");
        assert_eq!(display_value(&json!({"v": 0}), &column), "-");
        assert_eq!(display_value(&json!({"v": false}), &column), "-");
        assert_eq!(display_value(&json!({"v": "x"}), &column), "x");
        assert_eq!(display_value(&json!({"v": 42}), &column), "42");
    }

    #[test]
    fn date_format_parses_and_falls_back_on_garbage() {
        let column = Column::new("d", "D").date();
        assert_eq!(
            display_value(&json!({"d": "2024-03-15"}), &column),
            "2024/03/15"
        );
        assert_eq!(
            display_value(&json!({"d": "2024-03-15T08:30:00Z"}), &column),
            "2024/03/15"
        );
        // Parse failure is swallowed; raw value comes through unmodified.
        assert_eq!(
            display_value(&json!({"d": "next tuesday"}), &column),
            "next tuesday"
        );
        assert_eq!(display_value(&json!({"d": ""}), &column), "-");
        assert_eq!(display_value(&json!({}), &column), "-");
    }

    #[test]
    fn custom_formatter_output_is_authoritative() {
        let upper = Column::new("v", "V").custom(|value, _row| value_text(value).to_uppercase());
        assert_eq!(display_value(&json!({"v": "abc"}), &upper), "ABC");

        // Even an empty formatter result bypasses placeholder substitution.
        let blank = Column::new("v", "V").custom(|_, _| String::new());
        assert_eq!(display_value(&json!({"v": ""}), &blank), "");
    }

    #[test]
    fn custom_formatter_sees_the_whole_row() {
        let column = Column::new("qty", "Qty")
            .custom(|value, row| format!("{} {}", value_text(value), value_text(resolve(row, "unit"))));
        assert_eq!(
            display_value(&json!({"qty": 3, "unit": "pcs"}), &column),
            "3 pcs"
        );
    }

    // --- sorting ---

    fn sort_on(key: &str, direction: SortDirection) -> SortState {
        SortState {
            active: Some(ActiveSort {
                key: key.to_string(),
                direction,
            }),
        }
    }

    #[test]
    fn unsorted_state_is_identity_pass_through() {
        let rows = vec![json!({"k": 2}), json!({"k": 1})];
        let out = sorted(&rows, &SortState::default());
        assert_eq!(out, rows);
    }

    #[test]
    fn sort_is_idempotent() {
        let state = sort_on("k", SortDirection::Ascending);
        let rows = vec![json!({"k": 3}), json!({"k": 1}), json!({"k": 2})];
        let once = sorted(&rows, &state);
        let twice = sorted(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn descending_reverses_ascending_without_ties() {
        let rows = vec![json!({"k": 2}), json!({"k": 3}), json!({"k": 1})];
        let asc = sorted(&rows, &sort_on("k", SortDirection::Ascending));
        let mut desc = sorted(&rows, &sort_on("k", SortDirection::Descending));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn ties_preserve_input_order() {
        let rows = vec![json!({"k": 1, "i": 0}), json!({"k": 1, "i": 1})];
        let out = sorted(&rows, &sort_on("k", SortDirection::Ascending));
        assert_eq!(*resolve(&out[0], "i"), json!(0));
        assert_eq!(*resolve(&out[1], "i"), json!(1));
    }

    #[test]
    fn sort_does_not_mutate_the_source() {
        let rows = vec![json!({"k": 2}), json!({"k": 1})];
        let _ = sorted(&rows, &sort_on("k", SortDirection::Ascending));
        assert_eq!(*resolve(&rows[0], "k"), json!(2));
    }

    #[test]
    fn missing_sort_keys_do_not_fail() {
        let rows = vec![json!({"k": "b"}), json!({}), json!({"k": "a"})];
        let out = sorted(&rows, &sort_on("k", SortDirection::Ascending));
        // Null ranks lowest.
        assert_eq!(*resolve(&out[0], "k"), Value::Null);
        assert_eq!(*resolve(&out[1], "k"), json!("a"));
    }

    #[test]
    fn tri_state_cycle_returns_to_unsorted() {
        let mut state = SortState::default();
        state.toggle("k");
        assert_eq!(state.direction_for("k"), Some(SortDirection::Ascending));
        state.toggle("k");
        assert_eq!(state.direction_for("k"), Some(SortDirection::Descending));
        state.toggle("k");
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn toggling_another_column_restarts_ascending() {
        let mut state = SortState::default();
        state.toggle("a");
        state.toggle("a");
        assert_eq!(state.direction_for("a"), Some(SortDirection::Descending));
        state.toggle("b");
        assert_eq!(state.direction_for("b"), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for("a"), None);
    }

    #[test]
    fn serial_no_sort_cycle_scenario() {
        let rows = vec![json!({"Serial_No": "A1"}), json!({"Serial_No": "B2"})];
        let mut state = SortState::default();

        state.toggle("Serial_No");
        let first = sorted(&rows, &state);
        assert_eq!(*resolve(&first[0], "Serial_No"), json!("A1"));
        assert_eq!(*resolve(&first[1], "Serial_No"), json!("B2"));

        state.toggle("Serial_No");
        let second = sorted(&rows, &state);
        assert_eq!(*resolve(&second[0], "Serial_No"), json!("B2"));
        assert_eq!(*resolve(&second[1], "Serial_No"), json!("A1"));

        state.toggle("Serial_No");
        let third = sorted(&rows, &state);
        assert_eq!(third, rows);
    }

    #[test]
    fn column_override_disables_sorting() {
        let default_column = Column::new("a", "A");
        let disabled_column = Column::new("b", "B").not_sortable();
        assert!(is_column_sortable(true, &default_column));
        assert!(!is_column_sortable(true, &disabled_column));
        assert!(!is_column_sortable(false, &default_column));
    }

    // --- identity ---

    #[test]
    fn row_key_prefers_id_then_serial_then_position() {
        assert_eq!(
            derive_row_key(&json!({"id": "r7", "Serial_No": "X9"}), 0),
            RowKey::Text("r7".into())
        );
        assert_eq!(
            derive_row_key(&json!({"id": null, "Serial_No": "X9"}), 0),
            RowKey::Text("X9".into())
        );
        assert_eq!(derive_row_key(&json!({}), 2), RowKey::Index(2));
    }

    #[test]
    fn empty_id_values_fall_through() {
        assert_eq!(
            derive_row_key(&json!({"id": "", "Serial_No": "X9"}), 0),
            RowKey::Text("X9".into())
        );
        assert_eq!(
            derive_row_key(&json!({"id": 0, "Serial_No": ""}), 5),
            RowKey::Index(5)
        );
    }

    #[test]
    fn numeric_id_is_stringified() {
        assert_eq!(derive_row_key(&json!({"id": 42}), 0), RowKey::Text("42".into()));
    }

    #[test]
    fn positional_identity_survives_resort() {
        // No id/Serial_No anywhere: identity is the source index, carried
        // through the sort rather than re-derived from display position.
        let rows = vec![json!({"k": "b"}), json!({"k": "a"})];
        let display = display_rows(&rows, &sort_on("k", SortDirection::Ascending));
        assert_eq!(display[0].key(), RowKey::Index(1));
        assert_eq!(display[1].key(), RowKey::Index(0));
    }

    // --- selection ---

    #[test]
    fn toggle_row_keeps_click_order() {
        let mut selection = Selection::default();
        selection.toggle(RowKey::Text("b".into()));
        selection.toggle(RowKey::Text("a".into()));
        assert_eq!(
            selection.keys(),
            &[RowKey::Text("b".into()), RowKey::Text("a".into())]
        );
        selection.toggle(RowKey::Text("b".into()));
        assert_eq!(selection.keys(), &[RowKey::Text("a".into())]);
    }

    #[test]
    fn select_all_round_trip() {
        let rows = display_rows(
            &[
                json!({"Serial_No": "A"}),
                json!({"Serial_No": "B"}),
                json!({"Serial_No": "C"}),
            ],
            &SortState::default(),
        );
        let all = apply_select_all(&rows, true);
        assert_eq!(all.len(), 3);
        let distinct: std::collections::HashSet<_> = all.keys().iter().collect();
        assert_eq!(distinct.len(), 3);

        let none = apply_select_all(&rows, false);
        assert!(none.is_empty());
    }

    #[test]
    fn select_all_state_is_a_pure_projection() {
        let rows = display_rows(
            &[json!({"Serial_No": "A"}), json!({"Serial_No": "B"})],
            &SortState::default(),
        );
        let mut selection = Selection::default();
        assert_eq!(select_all_state(&rows, &selection), SelectAllState::Unchecked);
        selection.toggle(RowKey::Text("A".into()));
        assert_eq!(
            select_all_state(&rows, &selection),
            SelectAllState::Indeterminate
        );
        selection.toggle(RowKey::Text("B".into()));
        assert_eq!(select_all_state(&rows, &selection), SelectAllState::Checked);
        assert_eq!(select_all_state(&[], &Selection::default()), SelectAllState::Unchecked);
    }

    #[test]
    fn select_all_reads_the_current_collection() {
        // Caller swaps the row collection between selection and select-all:
        // identities must come from the rows passed in now, not a cache.
        let old = display_rows(
            &[json!({"Serial_No": "OLD"})],
            &SortState::default(),
        );
        let _stale = apply_select_all(&old, true);

        let new = display_rows(
            &[json!({"Serial_No": "N1"}), json!({"Serial_No": "N2"})],
            &SortState::default(),
        );
        let refreshed = apply_select_all(&new, true);
        assert_eq!(
            refreshed.keys(),
            &[RowKey::Text("N1".into()), RowKey::Text("N2".into())]
        );
    }

    #[test]
    fn mixed_type_comparison_is_total_and_deterministic() {
        let values = [
            json!(null),
            json!(true),
            json!(2),
            json!("z"),
            json!([1]),
            json!({"a": 1}),
        ];
        for a in &values {
            assert_eq!(compare_values(a, a), Ordering::Equal);
            for b in &values {
                let ab = compare_values(a, b);
                let ba = compare_values(b, a);
                assert_eq!(ab, ba.reverse());
            }
        }
    }
}
