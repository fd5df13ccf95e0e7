//! Resting orders and incoming trade requests
//!
//! A `RestingOrder` lives in the book from insertion until removed by a match
//! or an explicit clear. A `TradeRequest` is transient and consumed by a
//! single submit call; its string-typed boundary form is `RawTradeRequest`.

use crate::errors::RequestError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::token::TokenRegistry;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// An order waiting in the book for a counterpart.
///
/// Quantity and limit price are strictly positive by construction; the book
/// owns every instance and hands out clones only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestingOrder {
    pub id: OrderId,
    pub token_in: String,
    pub token_out: String,
    pub quantity: Quantity,
    pub limit_price: Price,
    pub side: Side,
    /// Unix nanos at insertion
    pub placed_at: i64,
}

impl RestingOrder {
    /// Create a resting order with a fresh id.
    pub fn new(
        token_in: impl Into<String>,
        token_out: impl Into<String>,
        quantity: Quantity,
        limit_price: Price,
        side: Side,
        placed_at: i64,
    ) -> Self {
        Self {
            id: OrderId::new(),
            token_in: token_in.into(),
            token_out: token_out.into(),
            quantity,
            limit_price,
            side,
            placed_at,
        }
    }
}

/// A validated incoming order request, consumed by one submit call.
///
/// Token symbols are registry members and the amount is positive; both are
/// guaranteed by `RawTradeRequest::parse`, which is the only intended way a
/// presentation layer builds one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub token_in: String,
    pub token_out: String,
    pub amount: Quantity,
    pub limit_price: Option<Price>,
    pub side: Side,
}

/// The string-typed request shape produced by the presentation layer.
///
/// `amount` and `limit_price` arrive as decimal strings; `parse` validates
/// them against the registry before anything reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTradeRequest {
    pub token_in: String,
    pub token_out: String,
    pub amount: String,
    pub limit_price: Option<String>,
    pub side: Side,
}

impl RawTradeRequest {
    /// Validate and convert into a `TradeRequest`.
    ///
    /// Rejects unknown token symbols, identical pair legs, and amounts or
    /// limit prices that are unparsable or not strictly positive.
    pub fn parse(&self, registry: &TokenRegistry) -> Result<TradeRequest, RequestError> {
        if !registry.contains(&self.token_in) {
            return Err(RequestError::UnknownToken(self.token_in.clone()));
        }
        if !registry.contains(&self.token_out) {
            return Err(RequestError::UnknownToken(self.token_out.clone()));
        }
        if self.token_in == self.token_out {
            return Err(RequestError::IdenticalPair(self.token_in.clone()));
        }

        let amount = Quantity::from_str(&self.amount)
            .ok_or_else(|| RequestError::InvalidAmount(self.amount.clone()))?;

        let limit_price = match &self.limit_price {
            Some(raw) => Some(
                Price::from_str(raw)
                    .ok_or_else(|| RequestError::InvalidLimitPrice(raw.clone()))?,
            ),
            None => None,
        };

        Ok(TradeRequest {
            token_in: self.token_in.clone(),
            token_out: self.token_out.clone(),
            amount,
            limit_price,
            side: self.side,
        })
    }
}
