use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu.
///
/// Menu items are created once at startup and never change during a run.
/// Orders hold their own clones, so a menu can be dropped without affecting
/// orders already placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `name` - Display name, also the key used in revenue reports
    /// * `price` - Unit price, expected to be non-negative
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The fixed, ordered list of items the front desk can sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Position of the item in menu order, looked up by exact name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(vec![
            MenuItem::new("Burger", Decimal::new(1000, 2)),
            MenuItem::new("Pizza", Decimal::new(2000, 2)),
            MenuItem::new("Soda", Decimal::new(500, 2)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_keeps_its_order() {
        let menu = Menu::default();
        let names: Vec<&str> = menu.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Pizza", "Soda"]);
        assert_eq!(menu.position("Soda"), Some(2));
    }

    #[test]
    fn position_is_exact_match() {
        let menu = Menu::default();
        let pizza = menu.position("Pizza").map(|i| menu.items()[i].price);
        assert_eq!(pizza, Some(Decimal::new(20, 0)));
        assert!(menu.position("pizza").is_none());
        assert!(menu.position("Salad").is_none());
    }
}
