use serde::{Deserialize, Serialize};

use ordering_core::{Entity, Money, ProductId, RestaurantId};

/// Menu entry offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Read-only view of the restaurant an order is placed with.
///
/// Loaded by the caller; the order rules only need to know whether it is
/// accepting orders and what its menu costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: Vec<Product>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, active: bool, products: Vec<Product>) -> Self {
        Self {
            id,
            active,
            products,
        }
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn find_product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}
