// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the component tree of the admin app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::AdminProductsPage;
use crate::web_app::routes::PRODUCTS_PATH;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with routes
/// - 404 fallback
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Shop Admin - Products" />
        <Meta name="description" content="Back office product management" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/shop_admin.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=AdminProductsPage />
                    <Route path=path!("/admin/products") view=AdminProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=PRODUCTS_PATH
                    class="px-6 py-3 bg-amber-700 text-white rounded-lg hover:bg-amber-800 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
