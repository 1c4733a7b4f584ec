//! Category listing route handlers: search, size/color filters, sorting.

use std::cmp::Ordering;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use fashionshop_core::Product;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::products::ProductCardView;

/// Category shown when none is selected.
pub const DEFAULT_CATEGORY: &str = "men";

/// Category listing query parameters. All filters apply together and every
/// request recomputes from the full category-filtered list.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// Case-insensitive substring match on the product name.
    pub q: Option<String>,
    /// Exact size membership.
    pub size: Option<String>,
    /// Exact color membership.
    pub color: Option<String>,
    /// One of `price-asc`, `price-desc`, `rating-desc`.
    pub sort: Option<String>,
}

impl CategoryQuery {
    fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|s| !s.is_empty())
    }

    fn size(&self) -> Option<&str> {
        self.size.as_deref().filter(|s| !s.is_empty())
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|s| !s.is_empty())
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref().filter(|s| !s.is_empty())
    }
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    /// Capitalized category name.
    pub title: String,
    /// Raw category name (form action target).
    pub category: String,
    /// Available size options, derived from the category's products.
    pub sizes: Vec<String>,
    /// Available color options, derived from the category's products.
    pub colors: Vec<String>,
    /// Current query values, echoed into the filter controls.
    pub q: String,
    pub selected_size: String,
    pub selected_color: String,
    pub selected_sort: String,
    pub products: Vec<ProductCardView>,
    pub cart_count: u32,
}

/// Apply search, size, color, and sort to a category's product list.
fn apply_query(mut products: Vec<Product>, query: &CategoryQuery) -> Vec<Product> {
    if let Some(q) = query.search() {
        let needle = q.to_lowercase();
        products.retain(|p| p.name.to_lowercase().contains(&needle));
    }
    if let Some(size) = query.size() {
        products.retain(|p| p.sizes.iter().any(|s| s == size));
    }
    if let Some(color) = query.color() {
        products.retain(|p| p.colors.iter().any(|c| c == color));
    }

    match query.sort() {
        Some("price-asc") => products.sort_by(|a, b| a.effective_price().cmp(&b.effective_price())),
        Some("price-desc") => {
            products.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
        Some("rating-desc") => products.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        _ => {}
    }

    products
}

/// Distinct, sorted option values drawn from a category's products.
fn option_values<F>(products: &[Product], select: F) -> Vec<String>
where
    F: Fn(&Product) -> &[String],
{
    let mut values: Vec<String> = products
        .iter()
        .flat_map(|p| select(p).iter().cloned())
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Capitalize the first letter of a category name for the page title.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Display the default category listing.
#[instrument(skip(state))]
pub async fn show_default(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<impl IntoResponse> {
    render(state, DEFAULT_CATEGORY.to_string(), query).await
}

/// Display a category listing.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<impl IntoResponse> {
    render(state, name, query).await
}

async fn render(
    state: AppState,
    category: String,
    query: CategoryQuery,
) -> Result<CategoryTemplate> {
    let in_category = state.catalog().by_category(&category).await?;

    // Option sets come from the whole category, not the filtered subset,
    // so narrowing one filter never hides the others' choices.
    let sizes = option_values(&in_category, |p| &p.sizes);
    let colors = option_values(&in_category, |p| &p.colors);

    let products = apply_query(in_category, &query)
        .iter()
        .map(ProductCardView::from)
        .collect();

    Ok(CategoryTemplate {
        title: capitalize(&category),
        category,
        sizes,
        colors,
        q: query.q.clone().unwrap_or_default(),
        selected_size: query.size.clone().unwrap_or_default(),
        selected_color: query.color.clone().unwrap_or_default(),
        selected_sort: query.sort.clone().unwrap_or_default(),
        products,
        cart_count: state.cart().get().total_quantity(),
    })
}
