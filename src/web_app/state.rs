// web_app/state.rs - State of the admin product listing screen
//
// All transient UI state (filter, snapshot, loading flag, popup, selection,
// error messages) lives in one `ProductsScreen` value. Event handlers call
// its transition methods; nothing else mutates it. The async workflows at the
// bottom (load, delete then reload) run against any `ProductRepository`.

use std::cell::RefCell;

use crate::web_app::model::{Category, GridState, Popup, Product, ProductFilter};
use crate::web_app::repository::{ProductRepository, RepositoryError};

/// Identifies one Product Loader request
///
/// Tickets are issued in increasing order. Only the response for the most
/// recently issued ticket is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductsScreen {
    pub filter: ProductFilter,
    products: Option<Vec<Product>>,
    categories: Vec<Category>,
    loading: bool,
    latest_ticket: u64,
    popup: Popup,
    selected: Option<Product>,
    load_error: Option<String>,
    delete_error: Option<String>,
}

impl ProductsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- filter bar ----

    /// Select a category; the empty string selects "all categories"
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.filter.category = (!category.is_empty()).then_some(category);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = Some(search.into());
    }

    // ---- product loader ----

    /// Start a product load with the current filter
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.loading = true;
        tracing::debug!(ticket = self.latest_ticket, filter = ?self.filter, "loading products");
        LoadTicket(self.latest_ticket)
    }

    /// Apply the outcome of a product load
    ///
    /// Returns `false` when the response belongs to a superseded request and
    /// was discarded. A failed load keeps the previous snapshot.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, RepositoryError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale product load"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(products) => {
                tracing::info!("loaded {} products", products.len());
                self.products = Some(products);
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!("Error getting products: {}", e);
                self.load_error = Some(e.to_string());
            }
        }
        true
    }

    // ---- category loader ----

    pub fn set_categories(&mut self, result: Result<Vec<Category>, RepositoryError>) {
        match result {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::warn!("Error getting categories: {}", e),
        }
    }

    // ---- popup / delete workflow ----

    /// Open the delete confirmation for a grid row
    pub fn open_delete(&mut self, product: Product) {
        self.selected = Some(product);
        self.popup = Popup::DeleteProduct;
        self.delete_error = None;
    }

    /// Close the popup by any non-success path (outside click, cancel)
    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
        self.selected = None;
        self.delete_error = None;
    }

    /// Product the confirmation dialog will delete
    pub fn delete_target(&self) -> Result<&Product, RepositoryError> {
        match (self.popup, self.selected.as_ref()) {
            (Popup::DeleteProduct, Some(product)) => Ok(product),
            _ => Err(RepositoryError::NoSelection),
        }
    }

    /// Apply the outcome of deleting product `id`
    ///
    /// Returns `true` when the product is gone and the list needs a reload.
    /// On failure the dialog stays open with the same selection and shows the
    /// error. A result for a product that is no longer selected (the dialog
    /// was dismissed, or reopened for another row, while the delete ran)
    /// leaves the popup, the selection and the dialog error alone.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), RepositoryError>) -> bool {
        let selected = self.popup == Popup::DeleteProduct
            && self.selected.as_ref().is_some_and(|p| p.id == id);

        if !selected {
            match &result {
                Ok(()) => tracing::debug!(id, "product deleted after its dialog closed"),
                Err(e) => tracing::debug!(id, "ignoring delete failure for closed dialog: {}", e),
            }
            return result.is_ok();
        }

        match result {
            Ok(()) => {
                tracing::info!(id, "product deleted");
                self.close_popup();
                true
            }
            Err(e) => {
                tracing::warn!("Transaction failed: {}", e);
                self.delete_error = Some(e.to_string());
                false
            }
        }
    }

    // ---- read access ----

    pub fn grid_state(&self) -> GridState {
        if self.loading {
            return GridState::Loading;
        }
        match &self.products {
            Some(products) if !products.is_empty() => GridState::Populated,
            _ => GridState::Empty,
        }
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn popup(&self) -> Popup {
        self.popup
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }
}

/// Shared handle to a `ProductsScreen`
///
/// The page keeps the screen in a reactive signal; tests use a `RefCell`.
/// Both methods return `None` once the screen is gone. The closures never
/// run across an `.await`.
pub trait ScreenCell {
    fn view_screen<T>(&self, f: impl FnOnce(&ProductsScreen) -> T) -> Option<T>;
    fn update_screen<T>(&self, f: impl FnOnce(&mut ProductsScreen) -> T) -> Option<T>;
}

impl ScreenCell for RefCell<ProductsScreen> {
    fn view_screen<T>(&self, f: impl FnOnce(&ProductsScreen) -> T) -> Option<T> {
        Some(f(&self.borrow()))
    }

    fn update_screen<T>(&self, f: impl FnOnce(&mut ProductsScreen) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch products for `ticket` with the filter as it is now
///
/// Returns whether the response was applied.
pub async fn fetch_products<R, S>(repo: &R, screen: &S, ticket: LoadTicket) -> bool
where
    R: ProductRepository,
    S: ScreenCell,
{
    let Some(filter) = screen.view_screen(|s| s.filter.clone()) else {
        return false;
    };
    let result = repo.list_products(&filter).await;
    screen
        .update_screen(|s| s.finish_load(ticket, result))
        .unwrap_or(false)
}

/// Start a new product load (filter submit, refresh, after a delete)
pub async fn load_products<R, S>(repo: &R, screen: &S) -> bool
where
    R: ProductRepository,
    S: ScreenCell,
{
    match screen.update_screen(|s| s.begin_load()) {
        Some(ticket) => fetch_products(repo, screen, ticket).await,
        None => false,
    }
}

/// Fill the category selector
pub async fn load_categories<R, S>(repo: &R, screen: &S)
where
    R: ProductRepository,
    S: ScreenCell,
{
    let result = repo.list_categories().await;
    screen.update_screen(|s| s.set_categories(result));
}

/// Delete the selected product, then reload on success
///
/// Returns whether the product was deleted.
pub async fn confirm_delete<R, S>(repo: &R, screen: &S) -> bool
where
    R: ProductRepository,
    S: ScreenCell,
{
    let id = match screen.view_screen(|s| s.delete_target().map(|p| p.id.clone())) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            tracing::warn!("Delete not started: {}", e);
            return false;
        }
        None => return false,
    };

    let result = repo.delete_product(&id).await;
    let deleted = screen
        .update_screen(|s| s.finish_delete(&id, result))
        .unwrap_or(false);
    if deleted {
        load_products(repo, screen).await;
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            category: "drinks".to_string(),
            price: Decimal::ONE,
            image_url: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = ProductsScreen::new();
        assert!(!screen.is_loading());
        assert_eq!(screen.grid_state(), GridState::Empty);
        assert_eq!(screen.popup(), Popup::None);
        assert!(screen.selected().is_none());
    }

    #[test]
    fn test_set_category_empty_means_all() {
        let mut screen = ProductsScreen::new();
        screen.set_category("drinks");
        assert_eq!(screen.filter.category.as_deref(), Some("drinks"));
        screen.set_category("");
        assert_eq!(screen.filter.category, None);
    }

    #[test]
    fn test_loading_flag_follows_ticket() {
        let mut screen = ProductsScreen::new();
        let ticket = screen.begin_load();
        assert!(screen.is_loading());
        assert_eq!(screen.grid_state(), GridState::Loading);

        assert!(screen.finish_load(ticket, Ok(vec![product("p1")])));
        assert!(!screen.is_loading());
        assert_eq!(screen.grid_state(), GridState::Populated);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut screen = ProductsScreen::new();
        let first = screen.begin_load();
        let second = screen.begin_load();
        assert!(first < second);

        assert!(screen.finish_load(second, Ok(vec![product("new")])));
        assert!(!screen.finish_load(first, Ok(vec![product("old")])));
        assert_eq!(screen.products()[0].id, "new");
    }

    #[test]
    fn test_delete_target_requires_selection() {
        let screen = ProductsScreen::new();
        assert_eq!(screen.delete_target(), Err(RepositoryError::NoSelection));
    }

    #[test]
    fn test_failed_delete_keeps_dialog() {
        let mut screen = ProductsScreen::new();
        screen.open_delete(product("p1"));
        let kept = screen.finish_delete("p1", Err(RepositoryError::NotFound("p1".to_string())));
        assert!(!kept);
        assert_eq!(screen.popup(), Popup::DeleteProduct);
        assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p1"));
        assert_eq!(screen.delete_error(), Some("document not found: p1"));
    }

    #[test]
    fn test_late_delete_result_leaves_other_dialog_alone() {
        let mut screen = ProductsScreen::new();
        screen.open_delete(product("p2"));

        assert!(screen.finish_delete("p1", Ok(())));
        assert_eq!(screen.popup(), Popup::DeleteProduct);
        assert_eq!(screen.selected().map(|p| p.id.as_str()), Some("p2"));
    }
}
