// tests/screen_state_tests.rs - Popup, selection and grid state machines

mod memory;

use memory::product;
use shop_admin::web_app::model::{GridState, Popup};
use shop_admin::web_app::repository::RepositoryError;
use shop_admin::web_app::state::ProductsScreen;

#[test]
fn test_open_captures_clicked_row() {
    let mut screen = ProductsScreen::new();
    let row = product("p4", "Salted Crisps", "", "snacks");

    screen.open_delete(row.clone());
    assert_eq!(screen.popup(), Popup::DeleteProduct);
    assert_eq!(screen.selected(), Some(&row));
    assert_eq!(screen.delete_target(), Ok(&row));
}

#[test]
fn test_opening_another_row_replaces_selection() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    screen.open_delete(product("p2", "Orange Soda", "", "drinks"));
    assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p2"));
}

#[test]
fn test_outside_click_clears_selection() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));

    screen.close_popup();
    assert_eq!(screen.popup(), Popup::None);
    assert!(screen.selected().is_none());
    assert_eq!(screen.delete_target(), Err(RepositoryError::NoSelection));
}

#[test]
fn test_successful_delete_clears_selection() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));

    assert!(screen.finish_delete("p1", Ok(())));
    assert_eq!(screen.popup(), Popup::None);
    assert!(screen.selected().is_none());
}

#[test]
fn test_closing_clears_dialog_error() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    screen.finish_delete("p1", Err(RepositoryError::backend("offline")));
    assert!(screen.delete_error().is_some());

    screen.close_popup();
    assert!(screen.delete_error().is_none());
}

#[test]
fn test_reopening_clears_stale_dialog_error() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    screen.finish_delete("p1", Err(RepositoryError::NotFound("p1".to_string())));

    screen.open_delete(product("p2", "Orange Soda", "", "drinks"));
    assert!(screen.delete_error().is_none());
}

#[test]
fn test_popup_is_independent_of_loading() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    let ticket = screen.begin_load();
    screen.finish_load(ticket, Err(RepositoryError::backend("offline")));

    assert_eq!(screen.popup(), Popup::DeleteProduct);
    assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p1"));
}

#[test]
fn test_grid_state_transitions() {
    let mut screen = ProductsScreen::new();
    assert_eq!(screen.grid_state(), GridState::Empty);

    let ticket = screen.begin_load();
    assert_eq!(screen.grid_state(), GridState::Loading);
    screen.finish_load(ticket, Ok(vec![product("p1", "Cola Zero", "", "drinks")]));
    assert_eq!(screen.grid_state(), GridState::Populated);

    // Re-entered on every load
    let ticket = screen.begin_load();
    assert_eq!(screen.grid_state(), GridState::Loading);
    screen.finish_load(ticket, Ok(vec![]));
    assert_eq!(screen.grid_state(), GridState::Empty);
}

#[test]
fn test_filter_edits_do_not_touch_snapshot() {
    let mut screen = ProductsScreen::new();
    let ticket = screen.begin_load();
    screen.finish_load(ticket, Ok(vec![product("p1", "Cola Zero", "", "drinks")]));

    screen.set_category("snacks");
    screen.set_search("crisps");
    assert_eq!(screen.products().len(), 1);
    assert!(!screen.is_loading());
    assert_eq!(screen.filter.category.as_deref(), Some("snacks"));
    assert_eq!(screen.filter.search.as_deref(), Some("crisps"));
}

#[test]
fn test_tickets_increase() {
    let mut screen = ProductsScreen::new();
    let tickets: Vec<u64> = (0..4).map(|_| screen.begin_load().sequence()).collect();
    assert_eq!(tickets, vec![1, 2, 3, 4]);
}

#[test]
fn test_late_delete_success_keeps_other_dialog_open() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    let id = screen.delete_target().map(|p| p.id.clone()).unwrap();

    // Dismissed and reopened on another row while the delete runs
    screen.close_popup();
    screen.open_delete(product("p2", "Orange Soda", "", "drinks"));

    assert!(screen.finish_delete(&id, Ok(())));
    assert_eq!(screen.popup(), Popup::DeleteProduct);
    assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p2"));
}

#[test]
fn test_late_delete_failure_not_shown_in_other_dialog() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    let id = screen.delete_target().map(|p| p.id.clone()).unwrap();

    screen.close_popup();
    screen.open_delete(product("p2", "Orange Soda", "", "drinks"));

    assert!(!screen.finish_delete(&id, Err(RepositoryError::NotFound(id.clone()))));
    assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p2"));
    assert!(screen.delete_error().is_none());
}

#[test]
fn test_late_delete_after_dismiss_stays_closed() {
    let mut screen = ProductsScreen::new();
    screen.open_delete(product("p1", "Cola Zero", "", "drinks"));
    screen.close_popup();

    assert!(!screen.finish_delete("p1", Err(RepositoryError::backend("offline"))));
    assert_eq!(screen.popup(), Popup::None);
    assert!(screen.delete_error().is_none());
}
