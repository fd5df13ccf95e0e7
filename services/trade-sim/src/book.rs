//! Resting order storage
//!
//! Pure storage with no matching logic. Orders are kept in insertion order;
//! that order is significant, it is the tie-breaker for equally priced
//! counterparties. Readers get snapshot clones, never live references, so
//! external mutation cannot corrupt book state.

use tracing::debug;
use types::ids::OrderId;
use types::order::RestingOrder;

/// The mutable collection of resting orders.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<RestingOrder>,
}

impl OrderBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Append an order to the end of the book.
    ///
    /// Book length increases by exactly one; previously resting orders are
    /// never altered.
    pub fn insert(&mut self, order: RestingOrder) {
        debug!(order_id = %order.id, side = ?order.side, "order resting");
        self.orders.push(order);
    }

    /// Snapshot copy of the book in insertion order.
    ///
    /// Mutating the returned collection never affects internal state.
    pub fn orders(&self) -> Vec<RestingOrder> {
        self.orders.clone()
    }

    /// Borrowing view in insertion order, for in-crate matching scans.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.iter()
    }

    /// Remove exactly one order with the given id, returning it.
    ///
    /// No-op (None) when the id is not resting.
    pub fn remove_by_id(&mut self, id: &OrderId) -> Option<RestingOrder> {
        let position = self.orders.iter().position(|o| &o.id == id)?;
        Some(self.orders.remove(position))
    }

    /// Empty the book. Idempotent.
    pub fn clear(&mut self) {
        self.orders.clear();
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the book holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};
    use types::order::Side;

    fn order(price: u64) -> RestingOrder {
        RestingOrder::new(
            "ETH",
            "USDC",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(price),
            Side::SELL,
            1708123456789000000,
        )
    }

    #[test]
    fn test_insert_grows_by_one() {
        let mut book = OrderBook::new();
        assert!(book.is_empty());

        book.insert(order(2000));
        assert_eq!(book.len(), 1);

        book.insert(order(2100));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_inserted_order_retrievable_unchanged() {
        let mut book = OrderBook::new();
        let resting = order(2000);
        let expected = resting.clone();
        book.insert(resting);

        let snapshot = book.orders();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0], expected);
    }

    #[test]
    fn test_insert_preserves_prior_orders() {
        let mut book = OrderBook::new();
        let first = order(2000);
        let first_copy = first.clone();
        book.insert(first);
        book.insert(order(2100));

        assert_eq!(book.orders()[0], first_copy);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut book = OrderBook::new();
        book.insert(order(2000));

        let mut snapshot = book.orders();
        snapshot.clear();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut book = OrderBook::new();
        let resting = order(2000);
        let id = resting.id;
        book.insert(resting);
        book.insert(order(2100));

        let removed = book.remove_by_id(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(book.len(), 1);

        // Second removal of the same id is a no-op
        assert!(book.remove_by_id(&id).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut book = OrderBook::new();
        book.insert(order(2000));
        assert!(book.remove_by_id(&OrderId::new()).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut book = OrderBook::new();
        book.insert(order(2000));
        book.insert(order(2100));

        book.clear();
        assert_eq!(book.len(), 0);

        book.clear();
        assert_eq!(book.len(), 0);
    }
}
