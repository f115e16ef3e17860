// web_app/pages/products.rs - Admin product listing page
//
// Owns one `ProductsScreen` in a signal and drives it from the event
// handlers: mount, filter submit, refresh, delete confirm. Backend calls go
// through `ServerFnRepository` and run as local tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::{Popup, Product};
use crate::web_app::routes::ADD_PRODUCT_PATH;
use crate::web_app::server_fns::ServerFnRepository;
use crate::web_app::state::{self, ProductsScreen, ScreenCell};

impl ScreenCell for RwSignal<ProductsScreen> {
    fn view_screen<T>(&self, f: impl FnOnce(&ProductsScreen) -> T) -> Option<T> {
        self.try_with_untracked(f)
    }

    fn update_screen<T>(&self, f: impl FnOnce(&mut ProductsScreen) -> T) -> Option<T> {
        self.try_update(f)
    }
}

fn load_products(screen: RwSignal<ProductsScreen>) {
    spawn_local(async move {
        state::load_products(&ServerFnRepository, &screen).await;
    });
}

fn confirm_delete(screen: RwSignal<ProductsScreen>) {
    spawn_local(async move {
        state::confirm_delete(&ServerFnRepository, &screen).await;
    });
}

/// Admin product listing page
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let screen = RwSignal::new(ProductsScreen::new());

    // The initial load is issued during setup so the server-rendered page
    // already shows the loading state; the fetch itself runs in the browser.
    let initial_ticket = screen.try_update(|s| s.begin_load());
    Effect::new(move |_| {
        spawn_local(async move {
            state::load_categories(&ServerFnRepository, &screen).await;
        });
        if let Some(ticket) = initial_ticket {
            spawn_local(async move {
                state::fetch_products(&ServerFnRepository, &screen, ticket).await;
            });
        }
    });

    // Derived views of the screen state
    // Memos keep typing in the search field from re-rendering the grid.
    let grid_state = Signal::from(Memo::new(move |_| screen.with(|s| s.grid_state())));
    let products = Signal::from(Memo::new(move |_| screen.with(|s| s.products().to_vec())));
    let categories = Signal::from(Memo::new(move |_| screen.with(|s| s.categories().to_vec())));
    let dialog_product = Memo::new(move |_| {
        screen.with(|s| match (s.popup(), s.selected()) {
            (Popup::DeleteProduct, Some(product)) => Some(product.clone()),
            _ => None,
        })
    });
    let selected_category =
        Signal::derive(move || screen.with(|s| s.filter.category.clone().unwrap_or_default()));
    let search = Signal::derive(move || screen.with(|s| s.filter.search.clone().unwrap_or_default()));
    let load_error = Signal::derive(move || screen.with(|s| s.load_error().map(str::to_string)));
    let delete_error = Signal::derive(move || screen.with(|s| s.delete_error().map(str::to_string)));

    let on_category = Callback::new(move |category: String| {
        screen.update(|s| s.set_category(category));
    });
    let on_search = Callback::new(move |text: String| {
        screen.update(|s| s.set_search(text));
    });
    let on_submit = Callback::new(move |()| load_products(screen));
    let on_refresh = Callback::new(move |()| load_products(screen));
    let on_delete = Callback::new(move |product: Product| {
        screen.update(|s| s.open_delete(product));
    });
    let on_close_popup = Callback::new(move |()| {
        screen.update(|s| s.close_popup());
    });
    let on_confirm_delete = Callback::new(move |()| confirm_delete(screen));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <div class="container mt-12 mx-auto px-4">
                <h1 class="text-2xl text-amber-800 mb-2">"Products"</h1>

                // Toolbar
                <div class="flex gap-4 my-4">
                    <a
                        href=ADD_PRODUCT_PATH
                        class="bg-green-600 hover:bg-green-800 transition-colors text-white py-2 px-4 rounded-lg font-medium shadow-sm"
                    >
                        "New product"
                    </a>
                    <Button on_click=on_refresh variant="yellow">
                        "Refresh"
                    </Button>
                </div>
                <hr />

                <section class="mt-4 p-4 pb-8 bg-white border rounded shadow-sm">
                    <FilterBar
                        categories=categories
                        selected_category=selected_category
                        search=search
                        on_category=on_category
                        on_search=on_search
                        on_submit=on_submit
                    />
                    <hr class="mb-4" />

                    {move || load_error.get().map(|error| view! {
                        <div class="mb-4">
                            <ErrorDisplay error=error />
                        </div>
                    })}

                    <ProductGrid
                        state=grid_state
                        products=products
                        categories=categories
                        on_delete=on_delete
                    />
                </section>
            </div>

            // Delete confirmation
            {move || dialog_product.get().map(|product| view! {
                <ModalWrapper
                    title=format!("Delete {}", product.name)
                    on_close=on_close_popup
                >
                    <DeleteConfirmation
                        product=product
                        error=delete_error
                        on_confirm=on_confirm_delete
                    />
                </ModalWrapper>
            })}
        </div>
    }
}
