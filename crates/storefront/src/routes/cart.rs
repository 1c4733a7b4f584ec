//! Cart route handlers.
//!
//! Every mutation is a plain form POST that persists the cart and
//! redirects back to `/cart`, redrawing the whole row list with a fresh
//! total and nav count.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use fashionshop_core::{Cart, Product};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

use super::products::{format_money, format_price};

/// Cart row display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub size: String,
    pub color: String,
    /// Unit effective price, preformatted.
    pub price: String,
    pub quantity: u32,
}

/// Resolve cart lines against the catalog into display rows plus the
/// running total (sum of effective price x quantity, two decimals).
/// Lines whose product id no longer resolves are skipped.
pub fn build_rows(cart: &Cart, products: &[Product]) -> (Vec<CartItemView>, String) {
    let mut rows = Vec::with_capacity(cart.lines().len());
    let mut total = Decimal::ZERO;

    for line in cart.lines() {
        let Some(product) = products.iter().find(|p| p.id == line.product_id) else {
            continue;
        };
        let unit = product.effective_price();
        total += unit * Decimal::from(line.quantity);
        rows.push(CartItemView {
            product_id: line.product_id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            size: line.size.clone(),
            color: line.color.clone(),
            price: format_price(unit),
            quantity: line.quantity,
        });
    }

    (rows, format_money(total))
}

/// Add to cart form data. Size and color fall back to the product's first
/// available option when absent.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Line selection form data for quantity controls and removal.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub cart_count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cart = state.cart().get();
    let products = state.catalog().products().await?;
    let (items, total) = build_rows(&cart, &products);

    Ok(CartShowTemplate {
        items,
        total,
        cart_count: cart.total_quantity(),
    })
}

/// Add a (product, size, color) selection to the cart.
///
/// Upserts: an existing line for the same selection has its quantity
/// incremented instead of a new line being created.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .find(&form.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let size = form
        .size
        .filter(|s| !s.is_empty())
        .or_else(|| product.sizes.first().cloned())
        .unwrap_or_default();
    let color = form
        .color
        .filter(|c| !c.is_empty())
        .or_else(|| product.colors.first().cloned())
        .unwrap_or_default();

    state
        .cart()
        .update(|cart| cart.add(&product.id, &size, &color))?;

    Ok(Redirect::to("/cart").into_response())
}

/// Increment a line's quantity.
#[instrument(skip(state))]
pub async fn increase(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    state
        .cart()
        .update(|cart| cart.increase(&form.product_id, &form.size, &form.color))?;
    Ok(Redirect::to("/cart"))
}

/// Decrement a line's quantity; a line at quantity 1 is removed.
#[instrument(skip(state))]
pub async fn decrease(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    state
        .cart()
        .update(|cart| cart.decrease(&form.product_id, &form.size, &form.color))?;
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<LineForm>,
) -> Result<impl IntoResponse> {
    state
        .cart()
        .update(|cart| cart.remove(&form.product_id, &form.size, &form.color))?;
    Ok(Redirect::to("/cart"))
}
