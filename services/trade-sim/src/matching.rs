//! Best-counterparty selection
//!
//! Read-only over the book: given an incoming request, selects at most one
//! resting order by price priority. Returning no match is a normal outcome,
//! not an error.

use rust_decimal::Decimal;
use tracing::debug;
use types::order::{RestingOrder, Side, TradeRequest};
use types::token::TokenRegistry;

use crate::book::OrderBook;

/// Select the best crossing counterparty for a request, if any.
///
/// The requester's effective price is its explicit limit when given,
/// otherwise the pair's mid reference price. Among opposite-side,
/// pair-compatible, crossing candidates the single best is chosen: the
/// lowest-priced resting sell for a buyer, the highest-priced resting buy
/// for a seller. Ties go to the earliest inserted order.
pub fn find_match(
    request: &TradeRequest,
    book: &OrderBook,
    registry: &TokenRegistry,
) -> Option<RestingOrder> {
    let effective_price = match request.limit_price {
        Some(limit) => limit.as_decimal(),
        None => registry.mid_price(&request.token_in, &request.token_out)?,
    };

    let mut best: Option<&RestingOrder> = None;
    for candidate in book.iter() {
        // Same-side orders can never match, regardless of price or pair.
        if candidate.side == request.side {
            continue;
        }
        if !pair_compatible(candidate, request) {
            continue;
        }
        if !crosses(request.side, effective_price, candidate.limit_price.as_decimal()) {
            continue;
        }

        best = match best {
            None => Some(candidate),
            // Strict improvement only: equal prices keep the earlier order.
            Some(current) => {
                let improves = match request.side {
                    Side::BUY => candidate.limit_price < current.limit_price,
                    Side::SELL => candidate.limit_price > current.limit_price,
                };
                if improves {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    if let Some(chosen) = best {
        debug!(
            order_id = %chosen.id,
            price = %chosen.limit_price,
            "counterparty selected"
        );
    }
    best.cloned()
}

/// Token-pair compatibility between a resting order and a request.
///
/// Accepts an exact reversal of the pair, or identical legs on both fields
/// (the side filter has already run). Resting flow is stored in natural pair
/// direction, so the identical-legs arm is rarely taken.
fn pair_compatible(order: &RestingOrder, request: &TradeRequest) -> bool {
    let reversed =
        order.token_in == request.token_out && order.token_out == request.token_in;
    let identical_legs =
        order.token_in == request.token_in && order.token_out == request.token_out;
    reversed || identical_legs
}

/// Check whether a resting price crosses the requester's effective price.
///
/// A buyer crosses resting sells priced at or below its price; a seller
/// crosses resting buys priced at or above it.
fn crosses(request_side: Side, request_price: Decimal, resting_price: Decimal) -> bool {
    match request_side {
        Side::BUY => resting_price <= request_price,
        Side::SELL => resting_price >= request_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};

    fn resting(side: Side, price: u64) -> RestingOrder {
        RestingOrder::new(
            "ETH",
            "USDC",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(price),
            side,
            1708123456789000000,
        )
    }

    fn buy_request(limit: Option<u64>) -> TradeRequest {
        TradeRequest {
            token_in: "USDC".to_string(),
            token_out: "ETH".to_string(),
            amount: Quantity::from_str("1.0").unwrap(),
            limit_price: limit.map(Price::from_u64),
            side: Side::BUY,
        }
    }

    #[test]
    fn test_crossing_buy_matches_resting_sell() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        let sell = resting(Side::SELL, 2000);
        let sell_id = sell.id;
        book.insert(sell);

        let found = find_match(&buy_request(Some(2100)), &book, &registry).unwrap();
        assert_eq!(found.id, sell_id);
    }

    #[test]
    fn test_non_crossing_returns_none() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        book.insert(resting(Side::SELL, 2200));

        assert!(find_match(&buy_request(Some(2100)), &book, &registry).is_none());
    }

    #[test]
    fn test_best_price_wins_for_buyer() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        let cheap = resting(Side::SELL, 2000);
        let cheap_id = cheap.id;
        book.insert(resting(Side::SELL, 2050));
        book.insert(cheap);

        let found = find_match(&buy_request(Some(2100)), &book, &registry).unwrap();
        assert_eq!(found.id, cheap_id);
    }

    #[test]
    fn test_best_price_wins_for_seller() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        let low = RestingOrder::new(
            "USDC",
            "ETH",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(1900),
            Side::BUY,
            1708123456789000000,
        );
        let high = RestingOrder::new(
            "USDC",
            "ETH",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(1950),
            Side::BUY,
            1708123456789000000,
        );
        let high_id = high.id;
        book.insert(low);
        book.insert(high);

        let request = TradeRequest {
            token_in: "ETH".to_string(),
            token_out: "USDC".to_string(),
            amount: Quantity::from_str("1.0").unwrap(),
            limit_price: Some(Price::from_u64(1800)),
            side: Side::SELL,
        };
        let found = find_match(&request, &book, &registry).unwrap();
        assert_eq!(found.id, high_id);
    }

    #[test]
    fn test_tie_goes_to_earliest_insertion() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        let first = resting(Side::SELL, 2000);
        let first_id = first.id;
        book.insert(first);
        book.insert(resting(Side::SELL, 2000));

        let found = find_match(&buy_request(Some(2100)), &book, &registry).unwrap();
        assert_eq!(found.id, first_id);
    }

    #[test]
    fn test_same_side_never_matches() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        // Resting buy at a price that would cross if sides were opposite
        book.insert(RestingOrder::new(
            "USDC",
            "ETH",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(2000),
            Side::BUY,
            1708123456789000000,
        ));

        assert!(find_match(&buy_request(Some(2100)), &book, &registry).is_none());
    }

    #[test]
    fn test_incompatible_pair_is_skipped() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        book.insert(RestingOrder::new(
            "WBTC",
            "USDT",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(1),
            Side::SELL,
            1708123456789000000,
        ));

        assert!(find_match(&buy_request(Some(2100)), &book, &registry).is_none());
    }

    #[test]
    fn test_identical_legs_opposite_side_matches() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        // Same legs as the request, opposite side
        let sell = RestingOrder::new(
            "USDC",
            "ETH",
            Quantity::from_str("1.0").unwrap(),
            Price::from_u64(2000),
            Side::SELL,
            1708123456789000000,
        );
        let sell_id = sell.id;
        book.insert(sell);

        let found = find_match(&buy_request(Some(2100)), &book, &registry).unwrap();
        assert_eq!(found.id, sell_id);
    }

    #[test]
    fn test_mid_price_used_without_limit() {
        let registry = TokenRegistry::standard();
        let mut book = OrderBook::new();
        // Mid for USDC->ETH is 3200; a resting sell below that crosses.
        let sell = resting(Side::SELL, 3100);
        let sell_id = sell.id;
        book.insert(sell);
        book.insert(resting(Side::SELL, 3300));

        let found = find_match(&buy_request(None), &book, &registry).unwrap();
        assert_eq!(found.id, sell_id);
    }

    #[test]
    fn test_empty_book_returns_none() {
        let registry = TokenRegistry::standard();
        let book = OrderBook::new();
        assert!(find_match(&buy_request(Some(2100)), &book, &registry).is_none());
    }
}
