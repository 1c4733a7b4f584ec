//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::products::ProductCardView;

/// Number of catalog entries shown as featured.
const FEATURED_COUNT: usize = 6;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products: the first entries of the catalog.
    pub products: Vec<ProductCardView>,
    pub cart_count: u32,
}

/// Display the home page with featured products.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let catalog = state.catalog().products().await?;
    let products = catalog
        .iter()
        .take(FEATURED_COUNT)
        .map(ProductCardView::from)
        .collect();

    Ok(HomeTemplate {
        products,
        cart_count: state.cart().get().total_quantity(),
    })
}
