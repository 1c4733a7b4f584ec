//! Product route handlers and shared display views.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use tracing::instrument;

use fashionshop_core::{Product, render_stars};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product card display data for templates. Shared by the home, category,
/// and offers grids.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Base price, preformatted (e.g. `$20`).
    pub price: String,
    /// Sale price, preformatted; struck against the base price when present.
    pub sale_price: Option<String>,
    /// Rendered star string, always 5 glyphs.
    pub stars: String,
    /// Offer badge text with underscores rendered as spaces.
    pub offer_label: Option<String>,
}

/// Review display data for templates.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub stars: String,
    pub text: String,
}

/// Product detail display data for templates.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub stars: String,
    pub offer_label: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub reviews: Vec<ReviewView>,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format a unit price the way the catalog states it (no forced decimals).
pub fn format_price(amount: Decimal) -> String {
    format!("${amount}")
}

/// Format a computed amount to two decimal places (totals, subtotals).
pub fn format_money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Render an offer tag for display: underscores become spaces.
pub fn offer_label(tag: &str) -> String {
    tag.replace('_', " ")
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: format_price(product.price),
            sale_price: product.sale_price.map(format_price),
            stars: render_stars(product.rating),
            offer_label: product.offer.as_deref().map(offer_label),
        }
    }
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: format_price(product.price),
            sale_price: product.sale_price.map(format_price),
            stars: render_stars(product.rating),
            offer_label: product.offer.as_deref().map(offer_label),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            reviews: product
                .reviews
                .iter()
                .map(|review| ReviewView {
                    stars: render_stars(review.rating),
                    text: review.text.clone(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub cart_count: u32,
}

/// Product not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub cart_count: u32,
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let cart_count = state.cart().get().total_quantity();

    let Some(product) = state.catalog().find(&id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            ProductNotFoundTemplate { cart_count },
        )
            .into_response());
    };

    Ok(ProductShowTemplate {
        product: ProductDetailView::from(&product),
        cart_count,
    }
    .into_response())
}
