//! Trade orchestration
//!
//! Composes match finding, execution simulation, and book mutation into the
//! single externally visible submit operation. One orchestrator owns one
//! book; construction is explicit and caller-controlled, with `clear` as the
//! reset. `submit` takes `&mut self`, so match-then-mutate is a single
//! non-interruptible unit per instance; callers that share an orchestrator
//! across tasks must serialize access themselves.

use chrono::Utc;
use tracing::{debug, info};
use types::ids::OrderId;
use types::numeric::Price;
use types::order::{RestingOrder, TradeRequest};
use types::outcome::ExecutionOutcome;
use types::token::TokenRegistry;

use crate::book::OrderBook;
use crate::demo::{DemoNarrator, NarrativeMode};
use crate::execution::ExecutionSimulator;
use crate::liquidity::{LiquidityConfig, LiquidityGenerator};
use crate::matching;

/// The engine facade consumed by the presentation layer.
pub struct TradeOrchestrator {
    registry: TokenRegistry,
    book: OrderBook,
    simulator: ExecutionSimulator,
    narrator: DemoNarrator,
}

impl TradeOrchestrator {
    /// Create an orchestrator over an empty book.
    ///
    /// The seed drives every stochastic figure the engine produces; equal
    /// seeds and call sequences reproduce equal outcomes.
    pub fn new(registry: TokenRegistry, seed: u64) -> Self {
        Self {
            registry,
            book: OrderBook::new(),
            simulator: ExecutionSimulator::new(seed),
            narrator: DemoNarrator::new(seed.wrapping_add(1)),
        }
    }

    /// Submit a request against the book.
    ///
    /// Exactly one of two things happens: an immediate match consumes the
    /// matched resting order, or the request itself is rested as a new order
    /// with a fresh id. Never both, never neither.
    pub fn submit(&mut self, request: &TradeRequest) -> ExecutionOutcome {
        let matched = matching::find_match(request, &self.book, &self.registry);
        let outcome = self
            .simulator
            .simulate(request, matched.as_ref(), &mut self.book);

        if matched.is_none() {
            let order = RestingOrder::new(
                request.token_in.clone(),
                request.token_out.clone(),
                request.amount,
                self.effective_limit(request),
                request.side,
                now_nanos(),
            );
            debug!(order_id = %order.id, "request rested on book");
            self.book.insert(order);
        }

        outcome
    }

    /// Run the detached demonstration path. Book state is never touched.
    pub async fn demo(
        &mut self,
        request: &TradeRequest,
        mode: NarrativeMode,
    ) -> ExecutionOutcome {
        self.narrator.run(request, &self.registry, mode).await
    }

    /// Populate the book with `count` synthetic resting orders.
    pub fn seed_liquidity(&mut self, count: usize, seed: u64) {
        let mut generator = LiquidityGenerator::new(LiquidityConfig::default(), seed);
        generator.populate(&mut self.book, &self.registry, count, now_nanos());
        info!(count, "book seeded");
    }

    /// Cancel a resting order by id. Returns whether it was resting.
    pub fn cancel(&mut self, id: &OrderId) -> bool {
        self.book.remove_by_id(id).is_some()
    }

    /// Snapshot of the current book.
    pub fn book_snapshot(&self) -> Vec<RestingOrder> {
        self.book.orders()
    }

    /// Number of resting orders.
    pub fn resting_count(&self) -> usize {
        self.book.len()
    }

    /// Empty the book. Idempotent.
    pub fn clear(&mut self) {
        self.book.clear();
    }

    /// The fixed token registry this orchestrator serves.
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Limit price a rested request carries: its own when given, otherwise
    /// the pair mid. A missing mid can only follow from an unregistered
    /// token, which violates the parse precondition; the amount then stands
    /// in as a positive placeholder.
    fn effective_limit(&self, request: &TradeRequest) -> Price {
        match request.limit_price {
            Some(limit) => limit,
            None => self
                .registry
                .mid_price(&request.token_in, &request.token_out)
                .and_then(Price::try_new)
                .unwrap_or_else(|| Price::new(request.amount.as_decimal())),
        }
    }
}

fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}
