//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Home page (featured products)
//! GET  /health                - Health check
//!
//! # Catalog
//! GET  /category              - Category listing (default category)
//! GET  /category/{name}       - Category listing with search/filter/sort
//! GET  /offers                - Offers page (?offer= filters by tag)
//! GET  /products/{id}         - Product detail with reviews
//!
//! # Cart
//! GET  /cart                  - Cart page
//! POST /cart/add              - Add a (product, size, color) selection
//! POST /cart/increase         - Increment a line's quantity
//! POST /cart/decrease         - Decrement a line's quantity (removes at 1)
//! POST /cart/remove           - Remove a line
//!
//! # Checkout
//! GET  /checkout              - Order summary
//! POST /checkout/place        - Place the order (clears the cart)
//! ```
//!
//! Every mutation redirects back to the page it affects, so the nav cart
//! count badge (rendered on every page) is always recomputed from the
//! persisted cart.

pub mod cart;
pub mod category;
pub mod checkout;
pub mod home;
pub mod offers;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/place", post(checkout::place))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Category listing
        .route("/category", get(category::show_default))
        .route("/category/{name}", get(category::show))
        // Offers
        .route("/offers", get(offers::show))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout routes
        .nest("/checkout", checkout_routes())
}
