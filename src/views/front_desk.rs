use crate::clients::KitchenApi;
use crate::model::{Menu, Order, OrderId};
use crate::views::OrderError;
use tracing::{debug, info, instrument, warn};

/// Upper bound on units of a single item per order.
pub const MAX_QUANTITY_PER_ITEM: u32 = 20;

/// Order entry: turns a table number and item quantities into an [`Order`].
///
/// All input validation lives here. The manager accepts whatever it is
/// given, so nothing reaches it unless it passed these checks.
pub struct FrontDesk<K: KitchenApi> {
    menu: Menu,
    kitchen: K,
}

impl<K: KitchenApi> FrontDesk<K> {
    pub fn new(menu: Menu, kitchen: K) -> Self {
        Self { menu, kitchen }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Builds an order from `(item name, quantity)` selections.
    ///
    /// Quantities for the same item are added together. Items with quantity
    /// zero are ignored. The resulting item list follows menu order, with
    /// each item repeated once per unit.
    pub fn build_order(
        &self,
        table: &str,
        selections: &[(&str, u32)],
    ) -> Result<Order, OrderError> {
        if table.is_empty() {
            return Err(OrderError::EmptyTable);
        }

        let mut quantities = vec![0u32; self.menu.len()];
        for &(name, quantity) in selections {
            let position = self
                .menu
                .position(name)
                .ok_or_else(|| OrderError::UnknownMenuItem(name.to_string()))?;
            let total = quantities[position].saturating_add(quantity);
            if total > MAX_QUANTITY_PER_ITEM {
                return Err(OrderError::QuantityOutOfRange {
                    item: name.to_string(),
                    quantity: total,
                    max: MAX_QUANTITY_PER_ITEM,
                });
            }
            quantities[position] = total;
        }

        let items: Vec<_> = self
            .menu
            .items()
            .iter()
            .zip(&quantities)
            .flat_map(|(item, &quantity)| std::iter::repeat(item.clone()).take(quantity as usize))
            .collect();

        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        Ok(Order::new(table, items))
    }

    /// Validates the selection and submits the order to the kitchen.
    #[instrument(skip(self, selections))]
    pub async fn place_order(
        &self,
        table: &str,
        selections: &[(&str, u32)],
    ) -> Result<OrderId, OrderError> {
        debug!(?selections, "place_order called");
        let order = match self.build_order(table, selections) {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "Order rejected");
                return Err(e);
            }
        };

        let id = self.kitchen.submit(order).await?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockKitchen;
    use crate::kitchen_actor::KitchenError;
    use crate::model::OrderStatus;
    use rust_decimal::Decimal;

    fn desk() -> (FrontDesk<MockKitchen>, MockKitchen) {
        let mock = MockKitchen::new();
        (FrontDesk::new(Menu::default(), mock.clone()), mock)
    }

    fn names(order: &Order) -> Vec<&str> {
        order.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_items_follow_menu_order_and_repeat() {
        let (desk, _) = desk();
        let order = desk.build_order("5", &[("Soda", 2), ("Burger", 1)]).unwrap();

        assert_eq!(names(&order), vec!["Burger", "Soda", "Soda"]);
        assert_eq!(order.total(), Decimal::new(20, 0));
        assert_eq!(order.status, OrderStatus::Placed);
    }

    #[test]
    fn test_empty_table_rejected() {
        let (desk, _) = desk();
        assert_eq!(desk.build_order("", &[("Burger", 1)]), Err(OrderError::EmptyTable));
    }

    #[test]
    fn test_zero_quantities_rejected() {
        let (desk, _) = desk();
        assert_eq!(desk.build_order("3", &[("Burger", 0)]), Err(OrderError::NoItems));
        assert_eq!(desk.build_order("3", &[]), Err(OrderError::NoItems));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let (desk, _) = desk();
        assert_eq!(
            desk.build_order("3", &[("Salad", 1)]),
            Err(OrderError::UnknownMenuItem("Salad".to_string()))
        );
    }

    #[test]
    fn test_quantity_limit_applies_to_summed_selections() {
        let (desk, _) = desk();
        assert!(desk.build_order("3", &[("Pizza", MAX_QUANTITY_PER_ITEM)]).is_ok());

        let result = desk.build_order("3", &[("Pizza", 15), ("Pizza", 6)]);
        assert_eq!(
            result,
            Err(OrderError::QuantityOutOfRange {
                item: "Pizza".to_string(),
                quantity: 21,
                max: MAX_QUANTITY_PER_ITEM,
            })
        );
    }

    #[tokio::test]
    async fn test_place_order_submits_valid_order() {
        let (desk, mock) = desk();
        mock.expect_submit().return_ok(OrderId(1));

        let id = desk.place_order("8", &[("Pizza", 1)]).await.unwrap();

        assert_eq!(id, OrderId(1));
        let submitted = mock.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].table_id, "8");
        assert_eq!(names(&submitted[0]), vec!["Pizza"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_order_never_reaches_kitchen() {
        let (desk, mock) = desk();

        let result = desk.place_order("", &[("Pizza", 1)]).await;

        assert_eq!(result, Err(OrderError::EmptyTable));
        assert!(mock.submitted().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_kitchen_failure_is_propagated() {
        let (desk, mock) = desk();
        mock.expect_submit().return_err(KitchenError::ActorClosed);

        let result = desk.place_order("2", &[("Soda", 1)]).await;

        assert_eq!(result, Err(OrderError::Kitchen(KitchenError::ActorClosed)));
        mock.verify();
    }
}
