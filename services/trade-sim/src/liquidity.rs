//! Synthetic liquidity seeding
//!
//! Populates a book with two-sided resting orders around the static
//! reference prices. Seed data only; nothing downstream validates
//! correctness against it. The RNG is injectable and seedable so tests can
//! reproduce exact books.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use types::numeric::{Price, Quantity};
use types::order::{RestingOrder, Side};
use types::token::TokenRegistry;

use crate::book::OrderBook;

/// Configuration for synthetic liquidity generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityConfig {
    /// Minimum spread fraction away from mid
    pub min_spread: f64,
    /// Maximum spread fraction away from mid
    pub max_spread: f64,
    /// Minimum order quantity
    pub min_quantity: f64,
    /// Maximum order quantity
    pub max_quantity: f64,
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            min_spread: 0.001,
            max_spread: 0.02,
            min_quantity: 0.1,
            max_quantity: 10.0,
        }
    }
}

/// Seeded generator of synthetic resting orders.
pub struct LiquidityGenerator {
    config: LiquidityConfig,
    rng: ChaCha8Rng,
}

impl LiquidityGenerator {
    /// Create a generator with a deterministic seed.
    pub fn new(config: LiquidityConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Append `count` synthetic orders to the book.
    ///
    /// Each order picks a random distinct token pair, a uniform side, a
    /// spread fraction in [min_spread, max_spread] applied below mid for
    /// buys and above mid for sells, and a uniform quantity. `timestamp` is
    /// the placement time of the first order; later orders advance by one
    /// nanosecond each to keep placement times distinct.
    pub fn populate(
        &mut self,
        book: &mut OrderBook,
        registry: &TokenRegistry,
        count: usize,
        timestamp: i64,
    ) {
        let symbols = registry.symbols();
        if symbols.len() < 2 {
            return;
        }

        for index in 0..count {
            let token_in = symbols[self.rng.gen_range(0..symbols.len())];
            let token_out = loop {
                let candidate = symbols[self.rng.gen_range(0..symbols.len())];
                if candidate != token_in {
                    break candidate;
                }
            };

            // Registry symbols always have reference marks
            let mid = match registry.mid_price(token_in, token_out) {
                Some(mid) => mid,
                None => continue,
            };

            let side = if self.rng.gen_bool(0.5) {
                Side::BUY
            } else {
                Side::SELL
            };
            let spread: f64 = self
                .rng
                .gen_range(self.config.min_spread..=self.config.max_spread);
            let factor = match side {
                Side::BUY => 1.0 - spread,
                Side::SELL => 1.0 + spread,
            };
            let factor = Decimal::from_f64(factor).unwrap_or(Decimal::ONE);
            let limit = (mid * factor).round_dp(18);

            let quantity_f: f64 = self
                .rng
                .gen_range(self.config.min_quantity..=self.config.max_quantity);
            let quantity = Decimal::from_f64(quantity_f)
                .map(|q| q.round_dp(8))
                .unwrap_or(Decimal::ONE);

            let (Some(limit_price), Some(quantity)) =
                (Price::try_new(limit), Quantity::try_new(quantity))
            else {
                continue;
            };

            book.insert(RestingOrder::new(
                token_in,
                token_out,
                quantity,
                limit_price,
                side,
                timestamp + index as i64,
            ));
        }

        info!(count, book_len = book.len(), "seed liquidity generated");
    }
}
