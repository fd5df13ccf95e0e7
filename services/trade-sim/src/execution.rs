//! Execution simulation
//!
//! Given a request and an optional match, mutates the book (removing a
//! consumed counterparty) and synthesizes the execution outcome. The
//! scan-count and latency figures are simulation artifacts sampled from a
//! seeded RNG, not measurements.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};
use types::ids::OrderId;
use types::numeric::Wad;
use types::order::{RestingOrder, Side, TradeRequest};
use types::outcome::ExecutionOutcome;

use crate::book::OrderBook;

/// Upper bound of the synthetic addition to the real scan count.
const SCAN_PADDING_MAX: u64 = 100;

/// Synthetic latency bounds in milliseconds. `execution_time_ms` is always
/// within [LATENCY_MS_MIN, LATENCY_MS_MAX].
pub const LATENCY_MS_MIN: f64 = 10.0;
pub const LATENCY_MS_MAX: f64 = 50.0;

/// Base units of the synthetic cost figure, plus a per-scanned-order term.
const COST_BASE_UNITS: u64 = 21_000;
const COST_PER_SCANNED: u64 = 150;

/// Caller-owned execution simulator with a deterministic RNG.
///
/// Identical seeds and call sequences reproduce identical synthetic figures.
pub struct ExecutionSimulator {
    rng: ChaCha8Rng,
}

impl ExecutionSimulator {
    /// Create a simulator with a deterministic seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Execute a request against an optional matched counterparty.
    ///
    /// With a match: the counterparty is removed from the book exactly once,
    /// the fill is `min(request.amount, match.quantity)` at the resting
    /// price, and the whole resting order is consumed regardless of any
    /// quantity mismatch. Without a match: the book is untouched and the
    /// outcome still reports success with absent fill fields.
    ///
    /// Never inserts the request into the book; resting the request on
    /// no-match is the orchestrator's responsibility.
    pub fn simulate(
        &mut self,
        request: &TradeRequest,
        matched: Option<&RestingOrder>,
        book: &mut OrderBook,
    ) -> ExecutionOutcome {
        // Book size measured before any removal, widened by a bounded
        // synthetic scan to mimic a larger venue.
        let resting_count = book.len() as u64;
        let orders_scanned = resting_count + self.rng.gen_range(0..=SCAN_PADDING_MAX);
        let execution_time_ms = self.rng.gen_range(LATENCY_MS_MIN..=LATENCY_MS_MAX);
        let synthetic_cost =
            (COST_BASE_UNITS + COST_PER_SCANNED * orders_scanned).to_string();

        let counterparty = match matched {
            Some(counterparty) => counterparty,
            None => {
                debug!(orders_scanned, "no counterparty; book untouched");
                return ExecutionOutcome::no_match(
                    orders_scanned,
                    execution_time_ms,
                    synthetic_cost,
                );
            }
        };

        if book.remove_by_id(&counterparty.id).is_none() {
            // The finder selected this order from the same book moments ago;
            // a miss here means the caller broke the submit serialization
            // contract.
            warn!(order_id = %counterparty.id, "matched order vanished before removal");
        }

        let filled = request.amount.min(counterparty.quantity);
        let taker_id = OrderId::new();
        let (buy_order_id, sell_order_id) = match counterparty.side {
            Side::SELL => (taker_id, counterparty.id),
            Side::BUY => (counterparty.id, taker_id),
        };

        debug!(
            matched_order_id = %counterparty.id,
            filled = %filled,
            price = %counterparty.limit_price,
            "trade executed"
        );

        ExecutionOutcome::filled(
            orders_scanned,
            execution_time_ms,
            synthetic_cost,
            counterparty.id,
            buy_order_id,
            sell_order_id,
            Wad::from_decimal(counterparty.limit_price.as_decimal()),
            Wad::from_decimal(filled.as_decimal()),
        )
    }
}
