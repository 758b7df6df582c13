use tracing::{debug, warn};

use ordering_core::{AggregateRoot, CustomerId, Entity, Money, OrderId, RestaurantId};

use crate::error::{OrderDomainError, OrderResult};
use crate::item::OrderItem;
use crate::value_objects::{OrderItemId, OrderStatus, StreetAddress, TrackingId};

/// Raw order data supplied by the caller before any rule has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: StreetAddress,
    /// Declared total price.
    pub price: Money,
    /// Unbound items, in the order they should be numbered.
    pub items: Vec<OrderItem>,
}

/// Lifecycle fields of an order that has already been initialized and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    pub id: OrderId,
    pub tracking_id: TrackingId,
    pub status: OrderStatus,
    pub failure_messages: Vec<String>,
}

/// Aggregate root: Order.
///
/// Lifecycle: an order is created from an [`OrderDraft`] with no identifier,
/// tracking id or status. [`Order::validate_order`] checks the draft and
/// [`Order::initialize_order`] then assigns identity, sets `Pending` and numbers
/// the items `1..=N`. Validation expects a not-yet-initialized order, so it must
/// run before initialization. Status changes afterwards go through the named
/// transitions (`pay`, `approve`, `init_cancel`, `cancel`, `mark_failed`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    tracking_id: Option<TrackingId>,
    status: Option<OrderStatus>,
    failure_messages: Vec<String>,
}

impl Order {
    pub fn new(draft: OrderDraft) -> Self {
        Self {
            id: None,
            customer_id: draft.customer_id,
            restaurant_id: draft.restaurant_id,
            delivery_address: draft.delivery_address,
            price: draft.price,
            items: draft.items,
            tracking_id: None,
            status: None,
            failure_messages: Vec::new(),
        }
    }

    /// Reconstruct a previously initialized order, re-binding its items `1..=N`.
    pub fn rehydrate(draft: OrderDraft, state: OrderState) -> OrderResult<Self> {
        let mut order = Self::new(draft);
        order.ensure_items_unbound()?;
        order.id = Some(state.id);
        order.tracking_id = Some(state.tracking_id);
        order.status = Some(state.status);
        order.failure_messages = state.failure_messages;
        order.bind_items(state.id)?;
        Ok(order)
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    /// Assign a fresh order id and tracking id, set `Pending` and number the items.
    ///
    /// Runs exactly once per order. On error nothing has been modified.
    pub fn initialize_order(&mut self) -> OrderResult<()> {
        if self.id.is_some() || self.tracking_id.is_some() || self.status.is_some() {
            return Err(OrderDomainError::invalid_state("order is already initialized"));
        }
        self.ensure_items_unbound()?;

        let order_id = OrderId::new();
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::new());
        self.status = Some(OrderStatus::Pending);
        self.bind_items(order_id)?;

        debug!(order_id = %order_id, items = self.items.len(), "order initialized");
        Ok(())
    }

    /// Check the draft: not yet initialized, positive total, consistent items
    /// whose subtotals add up to the total exactly. Stops at the first failure.
    pub fn validate_order(&self) -> OrderResult<()> {
        self.validate_initial_order()
            .and_then(|()| self.validate_total_price())
            .and_then(|()| self.validate_items_price())
            .inspect_err(|err| {
                warn!(customer_id = %self.customer_id, error = %err, "order rejected");
            })
    }

    pub fn pay(&mut self) -> OrderResult<()> {
        self.transition("pay", &[OrderStatus::Pending], OrderStatus::Paid)
    }

    pub fn approve(&mut self) -> OrderResult<()> {
        self.transition(
            "approve",
            &[OrderStatus::Pending, OrderStatus::Paid],
            OrderStatus::Approved,
        )
    }

    /// Start cancelling an order whose payment must be rolled back.
    pub fn init_cancel<I, S>(&mut self, failure_messages: I) -> OrderResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transition(
            "start cancelling",
            &[OrderStatus::Pending, OrderStatus::Paid],
            OrderStatus::Cancelling,
        )?;
        self.append_failure_messages(failure_messages);
        Ok(())
    }

    pub fn cancel<I, S>(&mut self, failure_messages: I) -> OrderResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transition(
            "cancel",
            &[
                OrderStatus::Pending,
                OrderStatus::Paid,
                OrderStatus::Cancelling,
            ],
            OrderStatus::Cancelled,
        )?;
        self.append_failure_messages(failure_messages);
        Ok(())
    }

    pub fn mark_failed<I, S>(&mut self, failure_messages: I) -> OrderResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transition(
            "fail",
            &[
                OrderStatus::Pending,
                OrderStatus::Paid,
                OrderStatus::Cancelling,
            ],
            OrderStatus::Failed,
        )?;
        self.append_failure_messages(failure_messages);
        Ok(())
    }
}

impl Order {
    fn ensure_items_unbound(&self) -> OrderResult<()> {
        match self.items.iter().position(OrderItem::is_initialized) {
            Some(index) => Err(OrderDomainError::invalid_state(format!(
                "item {} is already bound to an order",
                index + 1
            ))),
            None => Ok(()),
        }
    }

    fn bind_items(&mut self, order_id: OrderId) -> OrderResult<()> {
        for (item, sequence) in self.items.iter_mut().zip(1u64..) {
            item.initialize_order_item(order_id, OrderItemId::new(sequence))?;
        }
        Ok(())
    }

    fn validate_initial_order(&self) -> OrderResult<()> {
        if self.status.is_some() || self.id.is_some() {
            return Err(OrderDomainError::invalid_state(
                "order must not have an id or status before initialization",
            ));
        }
        Ok(())
    }

    fn validate_total_price(&self) -> OrderResult<()> {
        if !self.price.is_greater_than_zero() {
            return Err(OrderDomainError::invalid_price(format!(
                "order total must be greater than zero, got {}",
                self.price
            )));
        }
        Ok(())
    }

    fn validate_items_price(&self) -> OrderResult<()> {
        let items_total = self
            .items
            .iter()
            .zip(1usize..)
            .try_fold(Money::ZERO, |total, (item, position)| {
                Self::validate_item_price(item, position)?;
                Ok::<_, OrderDomainError>(total.try_add(item.sub_total())?)
            })?;

        if self.price != items_total {
            return Err(OrderDomainError::TotalMismatch {
                expected: self.price,
                actual: items_total,
            });
        }

        debug!(total = %items_total, items = self.items.len(), "order prices validated");
        Ok(())
    }

    fn validate_item_price(item: &OrderItem, position: usize) -> OrderResult<()> {
        if !item.is_valid_price() {
            return Err(OrderDomainError::invalid_price(format!(
                "item {position}: {} x {} does not equal subtotal {}",
                item.quantity(),
                item.price(),
                item.sub_total()
            )));
        }
        Ok(())
    }

    fn transition(
        &mut self,
        action: &'static str,
        allowed_from: &[OrderStatus],
        to: OrderStatus,
    ) -> OrderResult<()> {
        let from = self.status.ok_or_else(|| {
            OrderDomainError::invalid_state(format!(
                "cannot {action} an order that is not initialized"
            ))
        })?;

        if from.is_terminal() || !allowed_from.contains(&from) {
            return Err(OrderDomainError::InvalidTransition { from, action });
        }

        self.status = Some(to);
        debug!(order_id = ?self.id, %from, %to, "order status changed");
        Ok(())
    }

    fn append_failure_messages<I, S>(&mut self, failure_messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failure_messages.extend(
            failure_messages
                .into_iter()
                .map(Into::into)
                .filter(|message| !message.trim().is_empty()),
        );
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl AggregateRoot for Order {}
