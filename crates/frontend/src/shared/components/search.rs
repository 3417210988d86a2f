use leptos::prelude::*;

use crate::shared::icons::icon;

/// Minimum query length before the filter is applied.
pub const MIN_FILTER_LEN: usize = 3;

/// Returns true when `query` should narrow a list at all.
pub fn filter_active(query: &str) -> bool {
    query.trim().len() >= MIN_FILTER_LEN
}

/// Search input with a clear button. Commits the query to `on_change`
/// once it reaches [`MIN_FILTER_LEN`] characters (or becomes empty), so
/// one- and two-letter prefixes don't thrash the list.
#[component]
pub fn SearchBox(
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min {MIN_FILTER_LEN} chars)...")
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());

    let handle_input = move |value: String| {
        set_input_value.set(value.clone());
        if value.is_empty() || filter_active(&value) {
            on_change.run(value);
        }
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-box__input"
                class:search-box__input--active=move || filter_active(&input_value.get())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                (!input_value.get().is_empty()).then(|| {
                    view! {
                        <button
                            class="search-box__clear"
                            title="Clear"
                            on:click=move |_| {
                                set_input_value.set(String::new());
                                on_change.run(String::new());
                            }
                        >
                            {icon("x")}
                        </button>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_do_not_filter() {
        assert!(!filter_active(""));
        assert!(!filter_active("ab"));
        assert!(!filter_active("  a "));
        assert!(filter_active("abc"));
    }
}
