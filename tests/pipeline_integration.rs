//! End-to-end tests: catalog client against a mock API, through the view
//! controller, to the rendered screen.

use tcg_explorer::catalog::{CatalogClient, CatalogSource};
use tcg_explorer::config::{Config, OutputFormat};
use tcg_explorer::filters::FilterChainBuilder;
use tcg_explorer::format::ViewRenderer;
use tcg_explorer::sort::SortKey;
use tcg_explorer::view::{Phase, ViewController};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CARDS_FIXTURE: &str = include_str!("fixtures/cards_charizard.json");

async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("q", "name:charizard"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CARDS_FIXTURE))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> CatalogClient {
    let config = Config { base_url: server.uri(), ..Config::default() };
    CatalogClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_search_sorts_by_price_and_skips_malformed() {
    let server = catalog_server().await;
    let client = client_for(&server);

    let mut controller = ViewController::new(SortKey::PriceHigh);
    controller.search(&client, "charizard").await;

    let state = controller.state();
    assert_eq!(state.phase, Phase::Results);
    assert_eq!(state.result_count(), 3);

    let names: Vec<&str> = state.results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Charizard", "Charizard VMAX", "Charizard ex"]);

    // holofoil outranks unlimited, a zero market counts as unpriced
    assert_eq!(state.results[0].price, 384.5);
    assert_eq!(state.results[2].price, 0.0);
    assert_eq!(state.results[2].image_large, "https://images.pokemontcg.io/sv3/125.png");
    assert_eq!(state.results[1].artist, "N/A");
}

#[tokio::test]
async fn test_rendered_screen_with_detail() {
    let server = catalog_server().await;
    let client = client_for(&server);

    let mut controller = ViewController::new(SortKey::DateNew);
    controller.search(&client, "  charizard ").await;
    let opened = controller.select(0).map(|c| c.name.clone());
    assert_eq!(opened.as_deref(), Some("Charizard ex"));

    let screen = ViewRenderer::new(OutputFormat::Table).render(controller.state());
    assert!(screen.contains("Search: [charizard]"));
    assert!(screen.contains("Found Cards (3 results)"));
    assert!(screen.contains("Sorted by: Release Date (Newest)"));
    assert!(screen.contains("Card Detail"));
    assert!(screen.contains("Release Date: 2023/08/11"));
    assert!(screen.contains("Price: Not available"));
}

#[tokio::test]
async fn test_filters_narrow_results() {
    let server = catalog_server().await;
    let client = client_for(&server);

    let filters = FilterChainBuilder::new().price_range(Some(50.0), Some(100.0)).build();
    let mut controller = ViewController::with_filters(SortKey::NameAsc, filters);
    controller.search(&client, "charizard").await;

    // unpriced cards pass the price filter
    let names: Vec<&str> = controller.state().results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Charizard VMAX", "Charizard ex"]);
}

#[tokio::test]
async fn test_set_scoped_search_combines_clauses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("q", "name:charizard set.id:base1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut controller = ViewController::new(SortKey::default());
    controller.set_scope(Some("base1".to_string()));
    controller.search(&client, "charizard").await;

    assert_eq!(controller.state().phase, Phase::Empty);
}

#[tokio::test]
async fn test_server_error_shows_error_phase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut controller = ViewController::new(SortKey::default());
    controller.search(&client, "charizard").await;

    assert!(matches!(controller.state().phase, Phase::Error(_)));
    assert!(controller.state().results.is_empty());

    let screen = ViewRenderer::new(OutputFormat::Table).render(controller.state());
    assert!(screen.contains("Error:"));
}

#[tokio::test]
async fn test_fetch_sets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "sv3", "name": "Obsidian Flames", "series": "Scarlet & Violet"}]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let sets = client.fetch_sets().await.unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "Obsidian Flames");
}
