// web_app/components/filters.rs - Filter bar of the admin product grid
//
// Category selector + free-text field + submit button. The bar only
// reports changes; the page decides when to load.

use leptos::prelude::*;

use crate::web_app::model::Category;

/// Option value meaning "all categories"
pub const ALL_CATEGORIES: &str = "";

/// (value, label) pairs for the category selector, "all" first
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_string(), "All categories".to_string()))
        .chain(categories.iter().map(|c| (c.id.clone(), c.name.clone())))
        .collect()
}

/// Filter bar component
///
/// Submitting the form (button or Enter in the text field) runs `on_submit`.
#[component]
pub fn FilterBar(
    /// Categories for the selector
    categories: Signal<Vec<Category>>,
    /// Currently selected category id ("" for all)
    selected_category: Signal<String>,
    /// Current search text
    search: Signal<String>,
    /// Category picked in the selector
    on_category: Callback<String>,
    /// Search text edited
    on_search: Callback<String>,
    /// Filter submitted
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="flex gap-4 mb-4">
            <button
                type="submit"
                class="px-6 h-10 bg-yellow-400 text-white rounded-lg \
                       hover:bg-yellow-700 transition-colors font-semibold shadow-sm"
            >
                "Search"
            </button>

            <select
                class="w-48 h-10 px-3 border border-gray-200 rounded-lg bg-white text-gray-600 \
                       focus:ring-2 focus:ring-yellow-400 outline-none cursor-pointer"
                on:change=move |ev| on_category.run(event_target_value(&ev))
            >
                {move || {
                    category_options(&categories.get())
                        .into_iter()
                        .map(|(value, label)| {
                            let option_value = value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || selected_category.get() == option_value
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>

            <input
                type="text"
                placeholder="Search by name or description"
                class="flex-1 h-10 px-3 border border-gray-200 rounded-lg \
                       focus:ring-2 focus:ring-yellow-400 outline-none"
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </form>
    }
}
