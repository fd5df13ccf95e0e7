//! Fixed token registry and static reference price table
//!
//! The registry is built once at process start and never mutated. Reference
//! prices are static USD marks used to derive pair mid prices for requests
//! that carry no explicit limit and for synthetic liquidity seeding; they are
//! not a live price feed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A registered token: symbolic identifier, canonical address-like
/// identifier, and decimal precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
}

/// Immutable registry of the tokens the demo engine knows about.
///
/// Tokens are held in a fixed insertion order so that seeded random pair
/// selection is reproducible across runs.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    reference_prices: Vec<(String, Decimal)>,
}

impl TokenRegistry {
    /// Build the standard demo registry.
    pub fn standard() -> Self {
        let entries: &[(&str, &str, u8, Decimal)] = &[
            (
                "ETH",
                "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
                18,
                Decimal::from(3200),
            ),
            (
                "WBTC",
                "0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f",
                8,
                Decimal::from(64000),
            ),
            (
                "USDC",
                "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
                6,
                Decimal::ONE,
            ),
            (
                "USDT",
                "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9",
                6,
                Decimal::ONE,
            ),
            (
                "ARB",
                "0x912CE59144191C1204E64559FE8253a0e49E6548",
                18,
                Decimal::new(110, 2),
            ),
            (
                "DAI",
                "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1",
                18,
                Decimal::ONE,
            ),
        ];

        let tokens = entries
            .iter()
            .map(|(symbol, address, decimals, _)| Token {
                symbol: (*symbol).to_string(),
                address: (*address).to_string(),
                decimals: *decimals,
            })
            .collect();
        let reference_prices = entries
            .iter()
            .map(|(symbol, _, _, price)| ((*symbol).to_string(), *price))
            .collect();

        Self {
            tokens,
            reference_prices,
        }
    }

    /// Look up a token by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Check registry membership.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Registered symbols in fixed registry order.
    pub fn symbols(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.symbol.as_str()).collect()
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the registry is empty (never true for `standard`).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Static USD reference mark for a token.
    pub fn reference_price(&self, symbol: &str) -> Option<Decimal> {
        self.reference_prices
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, p)| *p)
    }

    /// Mid reference price for a pair: `reference(token_out) / reference(token_in)`.
    pub fn mid_price(&self, token_in: &str, token_out: &str) -> Option<Decimal> {
        let reference_in = self.reference_price(token_in)?;
        let reference_out = self.reference_price(token_out)?;
        if reference_in.is_zero() {
            return None;
        }
        Some(reference_out / reference_in)
    }
}
