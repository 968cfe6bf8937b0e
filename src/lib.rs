//! PokeCatalog - Pokémon TCG catalog lookups and collection valuation
//!
//! Talks to TCGDex, or to the pokemontcg.io gateway on RapidAPI when a key is
//! configured, and normalizes both into one set of card and set types.

pub mod config;
pub mod error;
pub mod portfolio;
pub mod tcg;
pub mod utils;

pub use config::CatalogConfig;
pub use error::{CatalogError, CollectionError, Result};
pub use portfolio::{
    refresh_card_values, CardCondition, Collection, GradingCompany, OwnedCard, PortfolioSummary,
    PriceRecord, RefreshReport, SealedProduct, SealedType,
};
pub use tcg::{CatalogCard, CatalogClient, CatalogSet, MarketPriceBundle, Provider, SeriesRef};
