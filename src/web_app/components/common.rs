// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used by the admin screens.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-amber-700"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Empty state shown when a list has nothing to display
#[component]
pub fn EmptyState(
    /// Headline
    title: &'static str,
    /// Optional explanation below the headline
    #[prop(default = "")]
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"☹"</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-500 max-w-md mx-auto">{hint}</p>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects. `variant` picks the colour.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Colour variant: "green", "yellow", "red"
    #[prop(default = "yellow")]
    variant: &'static str,
) -> impl IntoView {
    let class = format!(
        "px-4 py-2 text-white rounded-lg transition-colors disabled:bg-gray-400 \
         disabled:cursor-not-allowed font-medium shadow-sm active:transform active:scale-95 {}",
        button_variant_class(variant)
    );

    view! {
        <button
            type=button_type
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

fn button_variant_class(variant: &str) -> &'static str {
    match variant {
        "green" => "bg-green-600 hover:bg-green-800",
        "red" => "bg-red-500 hover:bg-red-700",
        _ => "bg-yellow-500 hover:bg-yellow-700",
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic should be
/// handled by the parent. Clicking outside the content, the close button
/// or pressing Escape all call `on_close`.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    title: String,
) -> impl IntoView {
    // The root takes focus on mount so Escape reaches it
    let root = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if let Some(el) = root.get() {
            let _ = el.focus();
        }
    });

    let handle_keydown = move |ev: KeyboardEvent| {
        if closes_modal(&ev.key()) {
            on_close.run(());
        }
    };

    // Close on backdrop click
    let handle_backdrop_click = move |_| {
        on_close.run(());
    };

    view! {
        <div
            node_ref=root
            tabindex="-1"
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6 outline-none"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-black/70 transition-opacity"
                on:click=handle_backdrop_click
            ></div>

            <div
                class="relative bg-white rounded-lg shadow-2xl w-full max-w-lg flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                    <h2 class="text-2xl font-semibold text-gray-700">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Price display component
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
) -> impl IntoView {
    view! {
        <span class="text-lg font-bold text-amber-800 bg-amber-50 px-2 py-1 rounded-lg">
            {format_price(price)}
        </span>
    }
}

pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}
