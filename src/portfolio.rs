//! Owned items and portfolio valuation.
//!
//! These are the records a collection keeps after picking a card from the
//! catalog, plus the aggregate numbers shown on the dashboard.

use crate::error::CatalogError;
use crate::tcg::{CatalogCard, CatalogClient};
use chrono::{DateTime, Utc};
use futures::stream::StreamExt;
use serde::{Deserialize, Serialize};
use std::fmt;

const UNKNOWN: &str = "Unknown";

/// Source tag for prices written by a catalog refresh
pub const AUTO_SOURCE: &str = "Auto";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCondition {
    Mint,
    #[default]
    NearMint,
    Excellent,
    Good,
    Played,
    Damaged,
}

impl fmt::Display for CardCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardCondition::Mint => "Mint",
            CardCondition::NearMint => "Near Mint",
            CardCondition::Excellent => "Excellent",
            CardCondition::Good => "Good",
            CardCondition::Played => "Played",
            CardCondition::Damaged => "Damaged",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SealedType {
    Booster,
    Display,
    /// Elite Trainer Box
    Etb,
    Collection,
    Tin,
    /// Ultra Premium Collection
    Upc,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingCompany {
    #[default]
    Raw,
    Psa,
    Bgs,
    Cgc,
    Pca,
}

/// One observed value of an owned item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: DateTime<Utc>,
    pub value: f64,
    pub source: String,
}

impl PriceRecord {
    /// Record stamped now with the `Auto` source
    pub fn auto(value: f64) -> Self {
        Self {
            date: Utc::now(),
            value,
            source: AUTO_SOURCE.to_string(),
        }
    }
}

/// A single card in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCard {
    pub name: String,
    pub set_name: String,
    pub series: String,
    pub card_number: String,
    pub rarity: String,
    #[serde(default)]
    pub condition: CardCondition,
    #[serde(default)]
    pub grading_company: GradingCompany,
    #[serde(default)]
    pub grade_value: Option<f64>,
    pub purchase_price: f64,
    #[serde(default = "Utc::now")]
    pub purchase_date: DateTime<Utc>,
    pub estimated_value: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_history: Vec<PriceRecord>,
}

impl OwnedCard {
    /// Extract the fields worth keeping from a catalog hit
    pub fn from_catalog(card: &CatalogCard, purchase_price: f64, condition: CardCondition) -> Self {
        let estimated_value = card
            .market_price()
            .filter(|price| *price > 0.0)
            .unwrap_or(purchase_price);

        let set = card.set.as_ref();
        OwnedCard {
            name: card.name.clone(),
            set_name: set.map_or_else(|| UNKNOWN.to_string(), |s| s.name.clone()),
            series: set
                .and_then(|s| s.serie.as_ref())
                .map_or_else(|| UNKNOWN.to_string(), |serie| serie.name.clone()),
            card_number: card.local_id.clone().unwrap_or_else(|| "?".to_string()),
            rarity: card.rarity.clone().unwrap_or_else(|| "Common".to_string()),
            condition,
            grading_company: GradingCompany::Raw,
            grade_value: None,
            purchase_price,
            purchase_date: Utc::now(),
            estimated_value,
            image_url: card.image_url(),
            price_history: Vec::new(),
        }
    }

    /// Set a new estimate and append it to the price history
    pub fn record_price(&mut self, record: PriceRecord) {
        self.estimated_value = record.value;
        self.price_history.push(record);
    }

    pub fn profit(&self) -> f64 {
        self.estimated_value - self.purchase_price
    }
}

/// Sealed product, possibly held in several copies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealedProduct {
    pub name: String,
    pub kind: SealedType,
    #[serde(default)]
    pub set_name: Option<String>,
    pub quantity: u32,
    pub purchase_price: f64,
    #[serde(default = "Utc::now")]
    pub purchase_date: DateTime<Utc>,
    pub estimated_value: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_history: Vec<PriceRecord>,
}

impl SealedProduct {
    /// New product bought today, estimated at its purchase price
    pub fn new(
        name: impl Into<String>,
        kind: SealedType,
        purchase_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            set_name: None,
            quantity,
            purchase_price,
            purchase_date: Utc::now(),
            estimated_value: purchase_price,
            image_url: None,
            price_history: Vec::new(),
        }
    }

    /// Set a new per-unit estimate and append it to the price history
    pub fn record_price(&mut self, record: PriceRecord) {
        self.estimated_value = record.value;
        self.price_history.push(record);
    }

    pub fn total_purchase_price(&self) -> f64 {
        self.purchase_price * f64::from(self.quantity)
    }

    pub fn total_estimated_value(&self) -> f64 {
        self.estimated_value * f64::from(self.quantity)
    }

    pub fn profit(&self) -> f64 {
        (self.estimated_value - self.purchase_price) * f64::from(self.quantity)
    }
}

/// Everything the user owns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub cards: Vec<OwnedCard>,
    #[serde(default)]
    pub sealed: Vec<SealedProduct>,
}

/// Dashboard figures for a collection
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub cards_value: f64,
    pub sealed_value: f64,
    pub total_value: f64,
    pub total_invested: f64,
    pub profit: f64,
    /// Profit relative to the amount invested, 0 when nothing was invested
    pub profit_percent: f64,
    /// Name and value of the most valuable card
    pub best_card: Option<(String, f64)>,
    pub card_count: usize,
    pub sealed_count: usize,
    pub total_items: usize,
}

impl PortfolioSummary {
    pub fn compute(cards: &[OwnedCard], sealed: &[SealedProduct]) -> Self {
        let cards_value: f64 = cards.iter().map(|c| c.estimated_value).sum();
        let sealed_value: f64 = sealed.iter().map(SealedProduct::total_estimated_value).sum();
        let total_value = cards_value + sealed_value;

        let total_invested: f64 = cards.iter().map(|c| c.purchase_price).sum::<f64>()
            + sealed
                .iter()
                .map(SealedProduct::total_purchase_price)
                .sum::<f64>();

        let profit = total_value - total_invested;
        let profit_percent = if total_invested > 0.0 {
            profit / total_invested * 100.0
        } else {
            0.0
        };

        let best_card = cards
            .iter()
            .max_by(|a, b| a.estimated_value.total_cmp(&b.estimated_value))
            .map(|c| (c.name.clone(), c.estimated_value));

        PortfolioSummary {
            cards_value,
            sealed_value,
            total_value,
            total_invested,
            profit,
            profit_percent,
            best_card,
            card_count: cards.len(),
            sealed_count: sealed.len(),
            total_items: cards.len() + sealed.len(),
        }
    }

    pub fn of(collection: &Collection) -> Self {
        Self::compute(&collection.cards, &collection.sealed)
    }
}

/// Outcome of a price refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub updated: usize,
    pub unpriced: usize,
    pub failed: usize,
}

/// Re-estimate owned cards from the catalog.
///
/// Lookups run with at most `concurrency` requests in flight. A card keeps its
/// previous estimate unless a positive price was resolved for it; every
/// resolved price is appended to the card's history as an `Auto` record.
pub async fn refresh_card_values(
    client: &CatalogClient,
    cards: &mut [OwnedCard],
    concurrency: usize,
) -> RefreshReport {
    let lookups = futures::stream::iter(cards.iter().enumerate().map(move |(idx, card)| {
        async move { (idx, client.resolve_price(&card.name, &card.card_number).await) }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    let mut report = RefreshReport::default();
    for (idx, result) in lookups {
        let card = &mut cards[idx];
        match result {
            Ok(price) if price > 0.0 => {
                log::debug!("{}: {} -> {}", card.name, card.estimated_value, price);
                card.record_price(PriceRecord::auto(price));
                report.updated += 1;
            }
            Ok(_) | Err(CatalogError::NoPriceAvailable { .. }) => {
                log::warn!("No price found for {} #{}", card.name, card.card_number);
                report.unpriced += 1;
            }
            Err(e) => {
                log::warn!("Failed to refresh {}: {}", card.name, e);
                report.failed += 1;
            }
        }
    }

    log::info!(
        "Refreshed {} cards ({} without price, {} failed)",
        report.updated,
        report.unpriced,
        report.failed
    );
    report
}

#[cfg(test)]
#[path = "portfolio_tests.rs"]
mod tests;
