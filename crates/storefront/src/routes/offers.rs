//! Offers page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::products::{ProductCardView, offer_label};

/// Offers page query parameters.
#[derive(Debug, Deserialize)]
pub struct OffersQuery {
    pub offer: Option<String>,
}

/// Offers page template.
#[derive(Template, WebTemplate)]
#[template(path = "offers.html")]
pub struct OffersTemplate {
    pub title: String,
    pub products: Vec<ProductCardView>,
    pub cart_count: u32,
}

/// Page title for an optional offer tag.
fn offers_title(offer: Option<&str>) -> String {
    offer.map_or_else(
        || "Offers".to_string(),
        |tag| format!("{} Offer", offer_label(tag)),
    )
}

/// Display the offers page: the whole catalog, or only products carrying
/// the requested offer tag.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<OffersQuery>,
) -> Result<impl IntoResponse> {
    let offer = query.offer.as_deref().filter(|tag| !tag.is_empty());

    let products: Vec<ProductCardView> = match offer {
        Some(tag) => state
            .catalog()
            .by_offer(tag)
            .await?
            .iter()
            .map(ProductCardView::from)
            .collect(),
        None => state
            .catalog()
            .products()
            .await?
            .iter()
            .map(ProductCardView::from)
            .collect(),
    };

    Ok(OffersTemplate {
        title: offers_title(offer),
        products,
        cart_count: state.cart().get().total_quantity(),
    })
}
