//! Normalized catalog entities.
//!
//! Both upstream dialects deserialize into the same types. Field divergence is
//! reconciled while decoding through private `Raw*` shapes, so callers never
//! see which provider answered.

use serde::Deserialize;
use std::cmp::Ordering;

/// Parent series of a set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesRef {
    pub id: String,
    pub name: String,
}

/// A set (extension) as listed by a provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSet")]
pub struct CatalogSet {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub symbol: Option<String>,
    pub serie: Option<SeriesRef>,
    /// Free-form, only used for display ordering
    pub release_date: Option<String>,
}

#[derive(Deserialize)]
struct SetImages {
    logo: Option<String>,
    symbol: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSet {
    id: String,
    #[serde(default)]
    name: String,
    logo: Option<String>,
    symbol: Option<String>,
    images: Option<SetImages>,
    series: Option<String>,
    serie: Option<SeriesRef>,
    release_date: Option<String>,
}

impl From<RawSet> for CatalogSet {
    fn from(raw: RawSet) -> Self {
        let (logo, symbol) = match raw.images {
            Some(images) => (images.logo, images.symbol),
            None => (raw.logo, raw.symbol),
        };

        // A bare series name stands in for both id and name
        let serie = match raw.series {
            Some(name) => Some(SeriesRef {
                id: name.clone(),
                name,
            }),
            None => raw.serie,
        };

        CatalogSet {
            id: raw.id,
            name: raw.name,
            logo,
            symbol,
            serie,
            release_date: raw.release_date,
        }
    }
}

/// Optional Cardmarket price observations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceBundle {
    pub average_sell_price: Option<f64>,
    pub trend_price: Option<f64>,
    pub avg1: Option<f64>,
    pub avg7: Option<f64>,
    pub avg30: Option<f64>,
    pub low_price: Option<f64>,
}

impl MarketPriceBundle {
    /// The single price shown to users: first present field in
    /// averageSellPrice, trendPrice, avg7, avg30, lowPrice, avg1.
    pub fn display_price(&self) -> Option<f64> {
        [
            self.average_sell_price,
            self.trend_price,
            self.avg7,
            self.avg30,
            self.low_price,
            self.avg1,
        ]
        .into_iter()
        .flatten()
        .next()
    }
}

/// Cardmarket block attached to a card
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: Option<String>,
    pub updated_at: Option<String>,
    pub prices: Option<MarketPriceBundle>,
}

/// A single card as returned by set listings and searches
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCard")]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    /// Raw image reference, either an asset stem or a full file URL
    pub image: Option<String>,
    pub local_id: Option<String>,
    pub rarity: Option<String>,
    pub set: Option<CatalogSet>,
    pub cardmarket: Option<CardMarket>,
}

#[derive(Deserialize)]
struct CardImages {
    small: Option<String>,
    large: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    #[serde(default)]
    id: String,
    name: String,
    image: Option<String>,
    images: Option<CardImages>,
    local_id: Option<String>,
    number: Option<String>,
    rarity: Option<String>,
    set: Option<CatalogSet>,
    cardmarket: Option<CardMarket>,
}

impl From<RawCard> for CatalogCard {
    fn from(raw: RawCard) -> Self {
        let image = raw
            .image
            .or_else(|| raw.images.and_then(|images| images.large.or(images.small)));

        CatalogCard {
            id: raw.id,
            name: raw.name,
            image,
            local_id: raw.local_id.or(raw.number),
            rarity: raw.rarity,
            set: raw.set,
            cardmarket: raw.cardmarket,
        }
    }
}

impl CatalogCard {
    /// Fetchable image URL, if the card has an image reference
    pub fn image_url(&self) -> Option<String> {
        self.image.as_deref().map(complete_image_url)
    }

    /// Display price from the Cardmarket bundle
    pub fn market_price(&self) -> Option<f64> {
        self.cardmarket
            .as_ref()
            .and_then(|market| market.prices.as_ref())
            .and_then(MarketPriceBundle::display_price)
    }
}

/// Turn an image reference into a URL. References already ending in `.jpg`
/// or `.png` are kept; anything else is an asset stem and gets `/high.png`.
pub fn complete_image_url(raw: &str) -> String {
    if raw.ends_with(".jpg") || raw.ends_with(".png") {
        raw.to_string()
    } else {
        format!("{}/high.png", raw)
    }
}

/// Order sets newest first for display; undated sets go last
pub fn sort_sets_by_release(sets: &mut [CatalogSet]) {
    sets.sort_by(|a, b| match (&a.release_date, &b.release_date) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
