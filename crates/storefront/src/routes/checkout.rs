//! Checkout route handlers: order summary and mock order placement.
//!
//! "Placing an order" only clears the persisted cart and shows a generated
//! identifier; there is no payment processing and no order record.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::instrument;

use fashionshop_core::{Cart, Product};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::products::format_money;

/// One summary line of the order.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    /// Effective unit price x quantity, two decimals.
    pub subtotal: String,
}

/// Resolve cart lines into order summary lines plus the grand total.
/// Lines whose product id no longer resolves are skipped.
pub fn build_summary(cart: &Cart, products: &[Product]) -> (Vec<OrderLineView>, String) {
    let mut lines = Vec::with_capacity(cart.lines().len());
    let mut total = Decimal::ZERO;

    for line in cart.lines() {
        let Some(product) = products.iter().find(|p| p.id == line.product_id) else {
            continue;
        };
        let subtotal = product.effective_price() * Decimal::from(line.quantity);
        total += subtotal;
        lines.push(OrderLineView {
            name: product.name.clone(),
            size: line.size.clone(),
            color: line.color.clone(),
            quantity: line.quantity,
            subtotal: format_money(subtotal),
        });
    }

    (lines, format_money(total))
}

/// Generate a pseudo-random order identifier.
fn order_id() -> String {
    let number: u32 = rand::rng().random_range(0..1_000_000);
    format!("ORD{number}")
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub lines: Vec<OrderLineView>,
    pub total: String,
    pub cart_count: u32,
}

/// Order confirmation page template. Carries no place-order control, so a
/// confirmed order cannot be resubmitted from this page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order_id: String,
    pub cart_count: u32,
}

/// Display the order summary.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cart = state.cart().get();
    let products = state.catalog().products().await?;
    let (lines, total) = build_summary(&cart, &products);

    Ok(CheckoutTemplate {
        lines,
        total,
        cart_count: cart.total_quantity(),
    })
}

/// Place the order: clear the cart and confirm with a generated id.
#[instrument(skip(state))]
pub async fn place(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.cart().update(Cart::clear)?;

    let order_id = order_id();
    tracing::info!(%order_id, "Order placed");

    Ok(ConfirmationTemplate {
        order_id,
        cart_count: 0,
    })
}
