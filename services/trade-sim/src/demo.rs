//! Detached demonstration path
//!
//! Drives the illustrative execution narrative shown by the interface. This
//! path bypasses the real match/execute cycle entirely: it fabricates a
//! guaranteed-success outcome with plausible synthetic figures and never
//! touches book state. The sampled latency is awaited for real, so the
//! narrative animation has something to follow; because no mutation exists
//! on this path, nothing can straddle the suspension point.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use types::ids::OrderId;
use types::numeric::Wad;
use types::order::{Side, TradeRequest};
use types::outcome::ExecutionOutcome;
use types::token::TokenRegistry;

/// Narrative policy selected by the caller.
///
/// Only the demonstration path consumes this; it never alters matching or
/// execution semantics on the real submit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NarrativeMode {
    /// Shielded routing story: no value-extraction cost is narrated.
    Protected,
    /// Open routing story: a fictitious loss percentage is narrated.
    Public,
}

/// Bounds of the fabricated scan figure.
const DEMO_SCAN_MIN: u64 = 25;
const DEMO_SCAN_MAX: u64 = 125;

/// Synthetic latency bounds in milliseconds, matching the real path.
const DEMO_LATENCY_MS_MIN: f64 = 10.0;
const DEMO_LATENCY_MS_MAX: f64 = 50.0;

/// Bounds of the fictitious value-extraction percentage in public mode.
const LOSS_PERCENT_MIN: f64 = 2.0;
const LOSS_PERCENT_MAX: f64 = 5.0;

/// Synthetic cost figure accounting, matching the real path.
const COST_BASE_UNITS: u64 = 21_000;
const COST_PER_SCANNED: u64 = 150;

/// Fabricates narrative outcomes from a deterministic RNG.
pub struct DemoNarrator {
    rng: ChaCha8Rng,
}

impl DemoNarrator {
    /// Create a narrator with a deterministic seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fabricate a guaranteed-success outcome for the request.
    ///
    /// Sleeps for the sampled synthetic latency before returning. The fill
    /// is narrated at the request's limit price when given, otherwise at the
    /// pair mid, for the full requested amount.
    pub async fn run(
        &mut self,
        request: &TradeRequest,
        registry: &TokenRegistry,
        mode: NarrativeMode,
    ) -> ExecutionOutcome {
        let orders_scanned = self.rng.gen_range(DEMO_SCAN_MIN..=DEMO_SCAN_MAX);
        let execution_time_ms = self
            .rng
            .gen_range(DEMO_LATENCY_MS_MIN..=DEMO_LATENCY_MS_MAX);
        let synthetic_cost =
            (COST_BASE_UNITS + COST_PER_SCANNED * orders_scanned).to_string();

        let narrated_price = match request.limit_price {
            Some(limit) => limit.as_decimal(),
            None => registry
                .mid_price(&request.token_in, &request.token_out)
                .unwrap_or(rust_decimal::Decimal::ONE),
        };

        let counterparty_id = OrderId::new();
        let taker_id = OrderId::new();
        let (buy_order_id, sell_order_id) = match request.side {
            Side::BUY => (taker_id, counterparty_id),
            Side::SELL => (counterparty_id, taker_id),
        };

        let loss_narrative_percent = match mode {
            NarrativeMode::Public => {
                Some(self.rng.gen_range(LOSS_PERCENT_MIN..=LOSS_PERCENT_MAX))
            }
            NarrativeMode::Protected => None,
        };

        debug!(?mode, orders_scanned, "narrative outcome fabricated");

        // Suspension point; all outcome state is already decided.
        tokio::time::sleep(Duration::from_millis(execution_time_ms as u64)).await;

        ExecutionOutcome {
            success: true,
            orders_scanned,
            execution_time_ms,
            synthetic_cost,
            matched_order_id: Some(counterparty_id),
            buy_order_id: Some(buy_order_id),
            sell_order_id: Some(sell_order_id),
            execution_price: Some(Wad::from_decimal(narrated_price)),
            filled_amount: Some(Wad::from_decimal(request.amount.as_decimal())),
            loss_narrative_percent,
        }
    }
}
