use ordering_core::{Entity, Money, OrderId, ProductId};

use crate::error::{OrderDomainError, OrderResult};
use crate::value_objects::OrderItemId;

/// Line item of an order: product, quantity, unit price and recorded subtotal.
///
/// An item has no identity of its own until the owning order binds it during
/// initialization; after that it carries the order id and its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    product_id: ProductId,
    quantity: u32,
    price: Money,
    sub_total: Money,
}

impl OrderItem {
    /// Unbound item as supplied by the caller. Nothing is validated here.
    pub fn new(product_id: ProductId, quantity: u32, price: Money, sub_total: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id,
            quantity,
            price,
            sub_total,
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn sub_total(&self) -> Money {
        self.sub_total
    }

    pub fn is_initialized(&self) -> bool {
        self.id.is_some() || self.order_id.is_some()
    }

    /// Bind the item to its order and assign its position.
    ///
    /// Allowed exactly once per item.
    pub(crate) fn initialize_order_item(
        &mut self,
        order_id: OrderId,
        item_id: OrderItemId,
    ) -> OrderResult<()> {
        if self.is_initialized() {
            return Err(OrderDomainError::invalid_state(format!(
                "order item for product {} is already bound to an order",
                self.product_id
            )));
        }

        self.order_id = Some(order_id);
        self.id = Some(item_id);
        Ok(())
    }

    /// Whether `quantity * price == sub_total` exactly and the subtotal is not negative.
    ///
    /// A multiplication overflow counts as an invalid price.
    pub fn is_valid_price(&self) -> bool {
        !self.sub_total.is_negative()
            && self.price.checked_multiply(self.quantity) == Some(self.sub_total)
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(minor: i64) -> Money {
        Money::from_minor_units(minor)
    }

    fn item(quantity: u32, price: i64, sub_total: i64) -> OrderItem {
        OrderItem::new(ProductId::new(), quantity, money(price), money(sub_total))
    }

    #[test]
    fn new_item_is_unbound() {
        let item = item(2, 1_000, 2_000);
        assert!(!item.is_initialized());
        assert_eq!(item.id(), None);
        assert_eq!(item.order_id(), None);
    }

    #[test]
    fn initialize_binds_order_and_position() {
        let mut item = item(2, 1_000, 2_000);
        let order_id = OrderId::new();

        item.initialize_order_item(order_id, OrderItemId::new(1)).unwrap();

        assert!(item.is_initialized());
        assert_eq!(item.id(), Some(&OrderItemId::new(1)));
        assert_eq!(item.order_id(), Some(order_id));
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let mut item = item(1, 500, 500);
        item.initialize_order_item(OrderId::new(), OrderItemId::new(1)).unwrap();

        let err = item
            .initialize_order_item(OrderId::new(), OrderItemId::new(2))
            .unwrap_err();
        match err {
            OrderDomainError::InvalidState(msg) if msg.contains("already bound") => {}
            other => panic!("expected InvalidState, got {other:?}"),
        }
        assert_eq!(item.id(), Some(&OrderItemId::new(1)));
    }

    #[test]
    fn consistent_decomposition_is_valid() {
        assert!(item(2, 1_000, 2_000).is_valid_price());
        assert!(item(1, 1_000, 1_000).is_valid_price());
        assert!(item(0, 1_000, 0).is_valid_price());
    }

    #[test]
    fn inconsistent_decomposition_is_invalid() {
        assert!(!item(2, 1_000, 1_500).is_valid_price());
        assert!(!item(2, 1_000, 2_001).is_valid_price());
    }

    #[test]
    fn negative_subtotal_is_invalid_even_if_it_multiplies_out() {
        assert!(!item(2, -500, -1_000).is_valid_price());
    }

    #[test]
    fn overflowing_multiplication_is_invalid() {
        assert!(!item(3, i64::MAX / 2, i64::MAX).is_valid_price());
    }
}
