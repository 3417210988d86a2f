//! Shared building blocks for the list tables: sortable header cells,
//! selection checkboxes and the full-width placeholder row.

pub mod model;

pub use model::{placeholder_colspan, ColumnSpec};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::list_state::SelectAllState;

/// Placeholder row used for the loading, empty and error states.
#[component]
pub fn TableMessage(
    colspan: usize,
    #[prop(into)] text: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error {
        "table__message table__message--error"
    } else {
        "table__message"
    };
    view! {
        <tr>
            <td colspan=colspan.to_string() class=class>{text}</td>
        </tr>
    }
}

/// Clickable header cell with the sort indicator.
#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    #[prop(optional)] numeric: bool,
    /// Indicator text from `SortState::indicator`.
    #[prop(into)] indicator: Signal<&'static str>,
    on_sort: Callback<()>,
) -> impl IntoView {
    let class = if numeric {
        "table__header table__header--sortable table__header--numeric"
    } else {
        "table__header table__header--sortable"
    };
    view! {
        <th class=class on:click=move |_| on_sort.run(())>
            {label}
            <span class="table__sort-indicator">{move || indicator.get()}</span>
        </th>
    }
}

/// Plain header cell.
#[component]
pub fn HeaderCell(label: &'static str, #[prop(optional)] numeric: bool) -> impl IntoView {
    let class = if numeric {
        "table__header table__header--numeric"
    } else {
        "table__header"
    };
    view! { <th class=class>{label}</th> }
}

/// Row checkbox cell; stops click propagation so row handlers don't fire.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td class="table__checkbox-cell" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header "select all" checkbox with the indeterminate visual state.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<SelectAllState>,
    /// true = select all visible, false = clear
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag is only reachable through the DOM element.
    Effect::new(move |_| {
        let current = state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(current == SelectAllState::Partial);
            }
        }
    });

    view! {
        <th class="table__checkbox-cell">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == SelectAllState::All
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
