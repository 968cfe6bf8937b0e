//! End-to-end search and pricing against a mocked TCGDex

use poke_catalog::{CardCondition, CatalogClient, CatalogConfig, CatalogError, OwnedCard};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(mock_server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::default())
        .unwrap()
        .with_base_url(mock_server.uri())
}

#[tokio::test]
async fn search_normalizes_card_and_price() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("name", "Pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "Pikachu", "image": "http://x/p", "cardmarket": {"prices": {"avg30": 12.5}}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cards = client.search_cards("Pikachu").await.unwrap();
    assert_eq!(cards.len(), 1);

    let card = &cards[0];
    assert_eq!(card.name, "Pikachu");
    assert_eq!(card.market_price(), Some(12.5));
    assert_eq!(card.image_url().as_deref(), Some("http://x/p/high.png"));

    // What a collection view stores after picking the card
    let owned = OwnedCard::from_catalog(card, 10.0, CardCondition::NearMint);
    assert_eq!(owned.estimated_value, 12.5);
}

#[tokio::test]
async fn wrapped_search_response_matches_bare_one() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server).await;

    let card = serde_json::json!({
        "id": "sv03.5-025",
        "name": "Pikachu",
        "image": "https://assets.tcgdex.net/fr/sv/sv03.5/025",
        "localId": "025",
        "rarity": "Commune",
        "cardmarket": {"prices": {"lowPrice": 0.1, "avg1": 0.3}}
    });

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("name", "bare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([card.clone()])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("name", "wrapped"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [card] })),
        )
        .mount(&mock_server)
        .await;

    let bare = client.search_cards("bare").await.unwrap();
    let wrapped = client.search_cards("wrapped").await.unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(bare[0].market_price(), Some(0.1));
}

#[tokio::test]
async fn price_lookup_reports_missing_data() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "Pikachu", "image": "http://x/p"}
        ])))
        .mount(&mock_server)
        .await;

    let result = client.resolve_price("Pikachu", "25").await;
    assert!(matches!(result, Err(CatalogError::NoPriceAvailable { .. })));
}
