//! The shopping cart and its line items.
//!
//! A line item is one (product, size, color) selection with a quantity.
//! The cart maintains two invariants:
//!
//! - at most one line exists per distinct (product id, size, color)
//!   combination; adding a duplicate selection increments the existing
//!   line's quantity instead of creating a new line
//! - quantity never drops below 1; decrementing a line at quantity 1
//!   removes it entirely
//!
//! The serialized shape is the persisted cart entry:
//! `[{ "id", "size", "color", "qty" }]`.

use serde::{Deserialize, Serialize};

/// One (product, size, color) selection with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier; a foreign key into the catalog, not validated
    /// against it.
    #[serde(rename = "id")]
    pub product_id: String,
    pub size: String,
    pub color: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartLine {
    fn matches(&self, product_id: &str, size: &str, color: &str) -> bool {
        self.product_id == product_id && self.size == size && self.color == color
    }
}

/// The mutable, persisted list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add one unit of a selection, merging into an existing line when the
    /// same (product id, size, color) combination is already present.
    pub fn add(&mut self, product_id: &str, size: &str, color: &str) {
        if let Some(line) = self.find_mut(product_id, size, color) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product_id: product_id.to_owned(),
                size: size.to_owned(),
                color: color.to_owned(),
                quantity: 1,
            });
        }
    }

    /// Increment the quantity of an existing line. No-op if the line does
    /// not exist.
    pub fn increase(&mut self, product_id: &str, size: &str, color: &str) {
        if let Some(line) = self.find_mut(product_id, size, color) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrement the quantity of an existing line, removing the line when
    /// its quantity would drop below 1.
    pub fn decrease(&mut self, product_id: &str, size: &str, color: &str) {
        if let Some(line) = self.find_mut(product_id, size, color) {
            if line.quantity > 1 {
                line.quantity -= 1;
            } else {
                self.remove(product_id, size, color);
            }
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: &str, size: &str, color: &str) {
        self.lines
            .retain(|line| !line.matches(product_id, size, color));
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total quantity across all lines (the nav badge value).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn find_mut(&mut self, product_id: &str, size: &str, color: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.matches(product_id, size, color))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_add_duplicate_selection_increments_quantity() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p1", "M", "red");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_distinct_selections_create_separate_lines() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p1", "L", "red");
        cart.add("p1", "M", "blue");

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        assert_eq!(cart.total_quantity(), 1);

        cart.decrease("p1", "M", "red");
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_decrease_above_one_keeps_line() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p1", "M", "red");

        cart.decrease("p1", "M", "red");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_drops_count_by_line_quantity() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p2", "S", "blue");
        let before = cart.total_quantity();

        cart.remove("p2", "S", "blue");
        assert_eq!(cart.total_quantity(), before - 1);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_increase_unknown_line_is_noop() {
        let mut cart = Cart::new();
        cart.increase("missing", "M", "red");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p2", "S", "blue");

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_serialized_shape_matches_persisted_entry() {
        let mut cart = Cart::new();
        cart.add("p1", "M", "red");
        cart.add("p1", "M", "red");

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"p1","size":"M","color":"red","qty":2}]"#
        );

        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
