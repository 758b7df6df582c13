//! Order domain service: rules that need more than the Order aggregate alone.

use chrono::{DateTime, Utc};
use tracing::info;

use ordering_core::OrderId;

use crate::error::{OrderDomainError, OrderResult};
use crate::events::{OrderCancelled, OrderCreated, OrderPaid};
use crate::order::Order;
use crate::restaurant::Restaurant;

/// Stateless coordinator used by application services.
///
/// Each operation mutates the order in place and, where other services need to
/// react, returns the event describing what happened. Publishing and persisting
/// are left to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderDomainService;

impl OrderDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the order, check it against the restaurant and initialize it.
    ///
    /// The order's own rules are checked first, so an already initialized
    /// order is reported as such. On any error the order is left untouched.
    pub fn validate_and_initiate(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
        occurred_at: DateTime<Utc>,
    ) -> OrderResult<OrderCreated> {
        order.validate_order()?;
        Self::validate_restaurant(order, restaurant)?;
        Self::validate_menu_prices(order, restaurant)?;
        order.initialize_order()?;

        let order_id = Self::require_id(order)?;
        let tracking_id = order.tracking_id().ok_or_else(|| {
            OrderDomainError::invalid_state("initialized order has no tracking id")
        })?;

        info!(order_id = %order_id, tracking_id = %tracking_id, "order initiated");
        Ok(OrderCreated {
            order_id,
            tracking_id,
            customer_id: order.customer_id(),
            restaurant_id: order.restaurant_id(),
            price: order.price(),
            occurred_at,
        })
    }

    pub fn pay_order(
        &self,
        order: &mut Order,
        occurred_at: DateTime<Utc>,
    ) -> OrderResult<OrderPaid> {
        order.pay()?;
        let order_id = Self::require_id(order)?;

        info!(order_id = %order_id, "order paid");
        Ok(OrderPaid {
            order_id,
            customer_id: order.customer_id(),
            restaurant_id: order.restaurant_id(),
            price: order.price(),
            occurred_at,
        })
    }

    pub fn approve_order(&self, order: &mut Order) -> OrderResult<()> {
        order.approve()?;
        info!(order_id = ?order.order_id(), "order approved");
        Ok(())
    }

    /// Begin cancelling a paid order; the returned event asks for the payment
    /// to be rolled back.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
        occurred_at: DateTime<Utc>,
    ) -> OrderResult<OrderCancelled> {
        order.init_cancel(failure_messages)?;
        let order_id = Self::require_id(order)?;

        info!(order_id = %order_id, "order payment is cancelling");
        Ok(OrderCancelled {
            order_id,
            customer_id: order.customer_id(),
            restaurant_id: order.restaurant_id(),
            price: order.price(),
            failure_messages: order.failure_messages().to_vec(),
            occurred_at,
        })
    }

    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> OrderResult<()> {
        order.cancel(failure_messages)?;
        info!(order_id = ?order.order_id(), "order cancelled");
        Ok(())
    }

    fn validate_restaurant(order: &Order, restaurant: &Restaurant) -> OrderResult<()> {
        if restaurant.restaurant_id() != order.restaurant_id() {
            return Err(OrderDomainError::invalid_state(format!(
                "order is placed with restaurant {} but restaurant {} was supplied",
                order.restaurant_id(),
                restaurant.restaurant_id()
            )));
        }
        if !restaurant.is_active() {
            return Err(OrderDomainError::RestaurantUnavailable(
                restaurant.restaurant_id(),
            ));
        }
        Ok(())
    }

    fn validate_menu_prices(order: &Order, restaurant: &Restaurant) -> OrderResult<()> {
        for item in order.items() {
            let product = restaurant.find_product(item.product_id()).ok_or_else(|| {
                OrderDomainError::invalid_price(format!(
                    "product {} is not on the menu of restaurant {}",
                    item.product_id(),
                    restaurant.restaurant_id()
                ))
            })?;
            if product.price != item.price() {
                return Err(OrderDomainError::invalid_price(format!(
                    "product {} costs {} but the order lists {}",
                    product.id,
                    product.price,
                    item.price()
                )));
            }
        }
        Ok(())
    }

    fn require_id(order: &Order) -> OrderResult<OrderId> {
        order
            .order_id()
            .ok_or_else(|| OrderDomainError::invalid_state("order is not initialized"))
    }
}
