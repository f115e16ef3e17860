use leptos::prelude::*;
use rust_decimal::Decimal;
use shop_admin::web_app::components::common::*;
use shop_admin::web_app::components::filters::category_options;
use shop_admin::web_app::model::Category;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let _owner = Owner::new();
    f();
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Loading...",
        });

        let _ = Loading(LoadingProps {
            message: "Loading products...",
        });
    });
}

#[test]
fn test_empty_state_instantiation() {
    with_runtime(|| {
        let _ = EmptyState(EmptyStateProps {
            title: "No results found",
            hint: "No product matches the selected category and search text.",
        });

        let _ = EmptyState(EmptyStateProps {
            title: "Nothing here",
            hint: "",
        });
    });
}

#[test]
fn test_error_display_instantiation() {
    with_runtime(|| {
        let _ = ErrorDisplay(ErrorDisplayProps {
            error: "backend error: products unavailable".to_string(),
        });
    });
}

#[test]
fn test_price_display_instantiation() {
    with_runtime(|| {
        for price in [Decimal::ZERO, Decimal::new(450, 2), Decimal::new(99999, 2)] {
            let _ = PriceDisplay(PriceDisplayProps { price });
        }
    });
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        for variant in ["gray", "green", "red", "yellow"] {
            let _ = Badge(BadgeProps {
                children: Box::new(move || view! { "Drinks" }.into_any()),
                variant,
            });
        }
    });
}

#[test]
fn test_format_price_matches_display() {
    assert_eq!(format_price(Decimal::new(69, 1)), "$6.90");
    assert_eq!(format_price(Decimal::new(5, 0)), "$5.00");
}

#[test]
fn test_category_options_for_selector() {
    let categories = vec![
        Category {
            id: "drinks".to_string(),
            name: "Drinks".to_string(),
        },
        Category {
            id: "snacks".to_string(),
            name: "Snacks".to_string(),
        },
    ];

    let options = category_options(&categories);
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].0, "");
    assert_eq!(options[1], ("drinks".to_string(), "Drinks".to_string()));
}
