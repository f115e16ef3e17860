// web_app/components/product.rs - Product display components
//
// Components for the admin product grid:
// - ProductCard: one grid cell with edit and delete actions
// - ProductGrid: loading / empty / populated states
// - DeleteConfirmation: body of the delete dialog

use leptos::prelude::*;

use super::common::{Badge, EmptyState, Loading, PriceDisplay};
use crate::web_app::model::{Category, GridState, Product};
use crate::web_app::routes::edit_product_path;

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// First `max_chars` characters of `text`, with an ellipsis when cut
pub fn description_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Product card for the admin grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Display name of the product's category, once categories are loaded
    category_name: Signal<Option<String>>,
    /// Delete button handler (opens the confirmation)
    on_delete: Callback<Product>,
) -> impl IntoView {
    let edit_href = edit_product_path(&product.id);
    let preview = description_preview(&product.description, DESCRIPTION_PREVIEW_CHARS);
    let image = product.image_url.clone();
    let name = product.name.clone();
    let price = product.price;

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 flex flex-col h-full overflow-hidden">
            {match image {
                Some(src) => view! {
                    <img src=src alt=name.clone() class="h-40 w-full object-cover" />
                }.into_any(),
                None => view! {
                    <div class="h-40 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-4xl">"📦"</span>
                    </div>
                }.into_any(),
            }}

            <div class="p-4 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-2 gap-2">
                    <h3 class="font-bold text-gray-900 line-clamp-2">{name}</h3>
                    <PriceDisplay price=price />
                </div>

                <p class="text-gray-600 text-sm mb-3 line-clamp-3 flex-1">{preview}</p>

                {move || category_name.get().map(|category| view! {
                    <div class="mb-3">
                        <Badge variant="yellow">{category}</Badge>
                    </div>
                })}

                <hr class="border-amber-800" />
                <div class="pt-2 flex gap-2">
                    <a
                        href=edit_href
                        class="bg-yellow-500 hover:bg-yellow-700 transition-colors text-white py-1 px-3 text-sm rounded"
                    >
                        "✎ Edit"
                    </a>
                    <button
                        type="button"
                        class="bg-red-500 hover:bg-red-700 transition-colors text-white py-1 px-3 text-sm rounded"
                        on:click=move |_| on_delete.run(product.clone())
                    >
                        "🗑 Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Result grid
///
/// Shows a spinner while a load is in flight, an empty state when the
/// snapshot has no products, and the cards otherwise.
#[component]
pub fn ProductGrid(
    /// Grid state derived from the screen
    state: Signal<GridState>,
    /// Current product snapshot
    products: Signal<Vec<Product>>,
    /// Categories, for the badge on each card
    categories: Signal<Vec<Category>>,
    /// Delete button handler
    on_delete: Callback<Product>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            {move || match state.get() {
                GridState::Loading => view! {
                    <Loading message="Loading products..." />
                }.into_any(),
                GridState::Empty => view! {
                    <EmptyState
                        title="No results found"
                        hint="No product matches the selected category and search text."
                    />
                }.into_any(),
                GridState::Populated => view! {
                    <div class="animate-fade-in">
                        <p class="text-gray-500 font-medium mb-4">
                            {move || product_count_label(products.get().len())}
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                            <For
                                each=move || products.get()
                                key=|p| p.id.clone()
                                children=move |product| {
                                    let category_name =
                                        card_category(categories, product.category.clone());
                                    view! {
                                        <ProductCard
                                            product=product
                                            category_name=category_name
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Name of category `id`, following the category list as it loads
pub fn card_category(categories: Signal<Vec<Category>>, id: String) -> Signal<Option<String>> {
    Signal::derive(move || {
        categories.with(|list| {
            list.iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
        })
    })
}

pub fn product_count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    }
}

/// Body of the delete confirmation dialog
///
/// Submitting the form runs `on_confirm`. A failed attempt leaves the dialog
/// open and shows `error`.
#[component]
pub fn DeleteConfirmation(
    /// The product about to be deleted
    product: Product,
    /// Error from the last failed attempt
    error: Signal<Option<String>>,
    /// Confirm handler
    on_confirm: Callback<()>,
) -> impl IntoView {
    let name = product.name;

    view! {
        <form
            on:submit=move |ev: leptos::web_sys::SubmitEvent| {
                ev.prevent_default();
                on_confirm.run(());
            }
        >
            <p class="text-md text-gray-700">
                {format!("Permanently delete the product \"{}\"?", name)}
            </p>

            {move || error.get().map(|message| view! {
                <p class="mt-4 text-sm text-red-600 bg-red-50 border border-red-200 rounded p-2">
                    {message}
                </p>
            })}

            <hr class="my-4" />
            <button
                type="submit"
                class="text-white h-10 hover:bg-red-700 bg-red-500 py-2 px-6 rounded cursor-pointer"
            >
                {format!("Delete {}", name)}
            </button>
        </form>
    }
}
