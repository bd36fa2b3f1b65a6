//! URL-style routes for the navigable screens.
//!
//! Routes keep the path grammar of the web UI this app fronts for, so a
//! `--route` flag or a log line reads the same as a browser address bar.

use crate::catalog::product::ProductId;

/// One routable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail(ProductId),
    AddProduct,
    EditProduct(ProductId),
}

impl Route {
    /// Parse a URL path. Returns `None` for anything outside the surface,
    /// including non-numeric ids.
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["products"] => Some(Route::Products),
            ["products", id] => id.parse().ok().map(Route::ProductDetail),
            ["add-product"] => Some(Route::AddProduct),
            ["products", id, "edit-product"] => id.parse().ok().map(Route::EditProduct),
            _ => None,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{id}"),
            Route::AddProduct => "/add-product".to_string(),
            Route::EditProduct(id) => format!("/products/{id}/edit-product"),
        }
    }
}
