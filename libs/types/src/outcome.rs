//! Execution outcome produced per submit call
//!
//! The outcome is the single structure a presentation layer consumes to
//! render match/no-match narratives. Produced fresh on every call and never
//! stored by the engine.

use crate::ids::OrderId;
use crate::numeric::Wad;
use serde::{Deserialize, Serialize};

/// Structured result of one submit (or demonstration) call.
///
/// A missing match is a normal outcome: `success` stays `true` and the
/// id/price/fill fields are absent. `loss_narrative_percent` is only ever
/// populated by the demonstration path in public mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub success: bool,
    pub orders_scanned: u64,
    pub execution_time_ms: f64,
    pub synthetic_cost: String,
    pub matched_order_id: Option<OrderId>,
    pub buy_order_id: Option<OrderId>,
    pub sell_order_id: Option<OrderId>,
    pub execution_price: Option<Wad>,
    pub filled_amount: Option<Wad>,
    pub loss_narrative_percent: Option<f64>,
}

impl ExecutionOutcome {
    /// Outcome for a submit that found no counterparty.
    pub fn no_match(orders_scanned: u64, execution_time_ms: f64, synthetic_cost: String) -> Self {
        Self {
            success: true,
            orders_scanned,
            execution_time_ms,
            synthetic_cost,
            matched_order_id: None,
            buy_order_id: None,
            sell_order_id: None,
            execution_price: None,
            filled_amount: None,
            loss_narrative_percent: None,
        }
    }

    /// Outcome for a submit that consumed a resting counterparty.
    #[allow(clippy::too_many_arguments)]
    pub fn filled(
        orders_scanned: u64,
        execution_time_ms: f64,
        synthetic_cost: String,
        matched_order_id: OrderId,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        execution_price: Wad,
        filled_amount: Wad,
    ) -> Self {
        Self {
            success: true,
            orders_scanned,
            execution_time_ms,
            synthetic_cost,
            matched_order_id: Some(matched_order_id),
            buy_order_id: Some(buy_order_id),
            sell_order_id: Some(sell_order_id),
            execution_price: Some(execution_price),
            filled_amount: Some(filled_amount),
            loss_narrative_percent: None,
        }
    }

    /// Whether this outcome carries a fill.
    pub fn is_match(&self) -> bool {
        self.matched_order_id.is_some()
    }
}
