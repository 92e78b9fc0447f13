//! Reusable data grid bound to untyped API rows.
//!
//! Pages hand in a [`Column`] descriptor set and a reactive row collection;
//! the table owns its own sort and selection state and reports row clicks
//! and selection changes back through callbacks. All decisions about
//! ordering, cell text and row identity live in [`engine`], which is pure
//! and unit-tested; this module is rendering glue.

pub mod engine;

pub use engine::{Align, CellFormat, Column, RowKey};

use engine::{SelectAllState, Selection, SortDirection, SortState};

use crate::shared::components::loading_spinner::LoadingSpinner;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::JsCast;

/// Sort indicator glyph for a header cell.
fn sort_indicator(sort: &SortState, key: &str) -> &'static str {
    match sort.direction_for(key) {
        Some(SortDirection::Ascending) => " \u{25B2}",
        Some(SortDirection::Descending) => " \u{25BC}",
        None => " \u{21C5}",
    }
}

fn header_class(column: &Column, table_sortable: bool, sort: &SortState) -> String {
    let mut classes = vec!["table-header"];
    match column.align {
        Some(Align::Center) => classes.push("text-center"),
        Some(Align::Right) => classes.push("text-right"),
        Some(Align::Left) | None => {}
    }
    if engine::is_column_sortable(table_sortable, column) {
        classes.push("sortable");
    }
    if sort.is_active(&column.key) {
        classes.push("sorted");
    }
    classes.join(" ")
}

fn cell_class(column: &Column) -> String {
    let mut classes = vec!["table-cell".to_string()];
    match column.align {
        Some(Align::Center) => classes.push("text-center".to_string()),
        Some(Align::Right) => classes.push("text-right".to_string()),
        Some(Align::Left) | None => {}
    }
    if let Some(width) = &column.width {
        classes.push(format!("width-{width}"));
    }
    classes.join(" ")
}

#[component]
pub fn DataTable(
    /// Column descriptors; `key` must be unique within the set.
    columns: Vec<Column>,

    /// Source row collection. The table never mutates it; sorting works
    /// on a derived copy.
    #[prop(into)]
    rows: Signal<Vec<Value>>,

    /// Shows a spinner instead of the table body while true.
    #[prop(into, optional)]
    loading: Signal<bool>,

    /// Adds a checkbox column and enables row selection.
    #[prop(optional, default = false)]
    selectable: bool,

    /// Table-wide sort default; individual columns may opt out.
    #[prop(optional, default = true)]
    sortable: bool,

    /// Fired once per click on a non-checkbox cell of a row.
    #[prop(optional)]
    on_row_click: Option<Callback<Value>>,

    /// Fired with the full current selection, in click order, whenever
    /// the selection changes.
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<RowKey>>>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);
    let sort = RwSignal::new(SortState::default());
    let selection = RwSignal::new(Selection::default());

    let display = Signal::derive(move || engine::display_rows(&rows.get(), &sort.get()));

    let emit_selection = move |current: &Selection| {
        if let Some(callback) = on_selection_change {
            callback.run(current.keys().to_vec());
        }
    };

    let column_count = columns.with_value(|c| c.len()) + usize::from(selectable);

    let header_checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property.
    Effect::new(move |_| {
        let state = engine::select_all_state(&display.get(), &selection.get());
        if let Some(input) = header_checkbox_ref.get() {
            if let Some(element) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                element.set_indeterminate(state == SelectAllState::Indeterminate);
            }
        }
    });

    let handle_select_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        // Identities are recomputed from the rows displayed right now, so a
        // row collection replaced since the last render cannot leak stale keys.
        let next = engine::apply_select_all(&display.get_untracked(), checked);
        selection.set(next.clone());
        emit_selection(&next);
    };

    let header_cells = move || {
        columns
            .get_value()
            .into_iter()
            .map(|column| {
                let column_sortable = engine::is_column_sortable(sortable, &column);
                let key = column.key.clone();
                let title = column.title.clone();
                let class_column = column.clone();
                let indicator = column_sortable.then(|| {
                    let key = column.key.clone();
                    view! {
                        <span class="sort-indicator">
                            {move || sort_indicator(&sort.get(), &key)}
                        </span>
                    }
                });
                view! {
                    <th
                        class=move || header_class(&class_column, sortable, &sort.get())
                        on:click=move |_| {
                            if column_sortable {
                                sort.update(|s| s.toggle(&key));
                            }
                        }
                    >
                        {title}
                        {indicator}
                    </th>
                }
            })
            .collect_view()
    };

    let body_rows = move || {
        let display_now = display.get();
        if display_now.is_empty() {
            return view! {
                <tr class="no-data-row">
                    <td class="no-data-cell" colspan=column_count>
                        "No data"
                    </td>
                </tr>
            }
            .into_any();
        }
        display_now
            .into_iter()
            .map(|display_row| {
                let row_key = display_row.key();
                let row = display_row.row;

                let cells = columns
                    .get_value()
                    .into_iter()
                    .map(|column| {
                        let text = engine::display_value(&row, &column);
                        view! { <td class=cell_class(&column)>{text}</td> }
                    })
                    .collect_view();

                let select_cell = selectable.then(|| {
                    let checked_key = row_key.clone();
                    let toggle_key = row_key.clone();
                    view! {
                        <td class="select-column">
                            <input
                                type="checkbox"
                                prop:checked=move || selection.get().contains(&checked_key)
                                on:click=|ev| ev.stop_propagation()
                                on:change=move |_| {
                                    selection.update(|s| s.toggle(toggle_key.clone()));
                                    emit_selection(&selection.get_untracked());
                                }
                            />
                        </td>
                    }
                });

                let class_key = row_key.clone();
                view! {
                    <tr
                        class="data-row"
                        class:selected=move || selection.get().contains(&class_key)
                        on:click=move |_| {
                            if let Some(callback) = on_row_click {
                                callback.run(row.clone());
                            }
                        }
                    >
                        {select_cell}
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let select_all_header = move || {
        selectable.then(|| view! {
            <th class="select-column">
                <input
                    node_ref=header_checkbox_ref
                    type="checkbox"
                    prop:checked=move || {
                        engine::select_all_state(&display.get(), &selection.get())
                            == SelectAllState::Checked
                    }
                    on:change=handle_select_all
                />
            </th>
        })
    };

    view! {
        <div class="data-table-wrapper">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="table-loading">
                            <LoadingSpinner text="Loading..." />
                        </div>
                    }
                }
            >
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>{select_all_header()} {header_cells()}</tr>
                        </thead>
                        <tbody>{body_rows}</tbody>
                    </table>
                </div>
            </Show>
            <Show when=move || selectable && !selection.get().is_empty()>
                <div class="selection-info">
                    {move || format!("{} selected", selection.get().len())}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::engine::{ActiveSort, SortDirection, SortState};
    use super::*;

    fn sorted_on(key: &str) -> SortState {
        SortState {
            active: Some(ActiveSort {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        }
    }

    #[test]
    fn indicator_follows_sort_state() {
        let mut state = SortState::default();
        assert_eq!(sort_indicator(&state, "k"), " \u{21C5}");
        state.toggle("k");
        assert_eq!(sort_indicator(&state, "k"), " \u{25B2}");
        state.toggle("k");
        assert_eq!(sort_indicator(&state, "k"), " \u{25BC}");
        assert_eq!(sort_indicator(&state, "other"), " \u{21C5}");
    }

    #[test]
    fn header_class_reflects_column_and_state() {
        let column = Column::new("k", "K").align(Align::Right);
        assert_eq!(
            header_class(&column, true, &SortState::default()),
            "table-header text-right sortable"
        );
        assert_eq!(
            header_class(&column, true, &sorted_on("k")),
            "table-header text-right sortable sorted"
        );
        assert_eq!(
            header_class(&Column::new("k", "K").not_sortable(), true, &SortState::default()),
            "table-header"
        );
    }

    #[test]
    fn cell_class_carries_presentation_hints() {
        let column = Column::new("k", "K").align(Align::Center).width("15%");
        assert_eq!(cell_class(&column), "table-cell text-center width-15%");
        assert_eq!(cell_class(&Column::new("k", "K")), "table-cell");
    }
}
