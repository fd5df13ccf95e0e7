//! Trade Simulation Engine
//!
//! In-memory order-matching and trade-execution simulation engine for the
//! demonstration trading interface. Maintains a book of resting orders,
//! selects the best counterparty for an incoming request by price priority,
//! and produces a structured execution outcome with synthetic performance
//! figures.
//!
//! **Key Invariants:**
//! - Every submit yields exactly one of: match + removal, or one insertion
//! - Best-price selection with first-in-first-matched tie breaking
//! - Deterministic given a seed (same inputs → same outputs)
//! - Same-side orders never match
//!
//! # Modules
//! - `book` — Resting order storage, no matching logic
//! - `matching` — Read-only best-counterparty selection
//! - `execution` — Book mutation and outcome synthesis
//! - `orchestrator` — The externally visible submit operation
//! - `liquidity` — Seeded synthetic book population
//! - `demo` — Detached narrative path, never touches the book

pub mod book;
pub mod demo;
pub mod execution;
pub mod liquidity;
pub mod matching;
pub mod orchestrator;

pub use book::OrderBook;
pub use demo::{DemoNarrator, NarrativeMode};
pub use execution::ExecutionSimulator;
pub use liquidity::{LiquidityConfig, LiquidityGenerator};
pub use matching::find_match;
pub use orchestrator::TradeOrchestrator;

/// Crate version constant
pub const VERSION: &str = "0.1.0";
