//! Pokémon TCG catalog access over two upstream providers

use std::fmt;

/// Upstream catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// TCGDex public API
    Primary,
    /// pokemontcg.io through RapidAPI, needs a key
    Alternate,
}

impl Provider {
    /// Set listing path, identical for both providers
    pub const SETS_PATH: &'static str = "/sets";

    /// Path and query for the cards of one set
    pub fn set_cards_path(&self, set_id: &str) -> String {
        match self {
            Provider::Primary => format!("/sets/{}/cards", urlencoding::encode(set_id)),
            Provider::Alternate => format!("/cards?q=set.id:{}", urlencoding::encode(set_id)),
        }
    }

    /// Path and query for a name search
    pub fn search_path(&self, query: &str) -> String {
        match self {
            Provider::Primary => format!("/cards?name={}", urlencoding::encode(query)),
            Provider::Alternate => format!("/cards?q=name:{}", urlencoding::encode(query)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Primary => write!(f, "TCGDex"),
            Provider::Alternate => write!(f, "RapidAPI"),
        }
    }
}

pub mod client;
pub mod envelope;
pub mod models;

pub use client::CatalogClient;
pub use models::{
    complete_image_url, sort_sets_by_release, CardMarket, CatalogCard, CatalogSet,
    MarketPriceBundle, SeriesRef,
};
