use cinescout_engine::{HttpSearchMetrics, MetricsError, MetricsSettings, MovieDto, SearchMetrics};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn metrics_for(server: &MockServer) -> HttpSearchMetrics {
    HttpSearchMetrics::new(&MetricsSettings::new(server.uri(), "metrics-key")).expect("client")
}

fn batman() -> MovieDto {
    MovieDto {
        id: 268,
        title: "Batman".to_string(),
        poster_path: Some("/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg".to_string()),
        vote_average: 7.2,
        release_date: Some("1989-06-23".to_string()),
        original_language: Some("en".to_string()),
        popularity: 45.1,
    }
}

#[tokio::test]
async fn trending_requests_the_ranked_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("order_by", "count"))
        .and(query_param("order", "desc"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Bearer metrics-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                {
                    "id": "doc-1",
                    "search_term": "batman",
                    "count": 41,
                    "movie_id": 268,
                    "title": "Batman",
                    "poster_url": "https://image.tmdb.org/t/p/w500/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let docs = metrics_for(&server).trending().await.expect("trending ok");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].search_term, "batman");
    assert_eq!(docs[0].count, 41);
}

#[tokio::test]
async fn trending_limit_follows_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = MetricsSettings::new(server.uri(), "metrics-key");
    settings.trending_limit = 2;
    let metrics = HttpSearchMetrics::new(&settings).expect("client");

    let docs = metrics.trending().await.expect("trending ok");
    assert!(docs.is_empty());
}

#[tokio::test]
async fn first_search_creates_a_document_with_the_normalized_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("search_term", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(body_partial_json(json!({
            "search_term": "batman",
            "count": 1,
            "movie_id": 268,
            "title": "Batman",
            "poster_url": "https://image.tmdb.org/t/p/w500/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    metrics_for(&server)
        .record_search("  Batman ", &batman())
        .await
        .expect("record ok");
}

#[tokio::test]
async fn repeat_search_increments_the_stored_counter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("search_term", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                {
                    "id": "doc-9",
                    "search_term": "batman",
                    "count": 3,
                    "movie_id": 268,
                    "title": "Batman"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/documents/doc-9"))
        .and(body_partial_json(json!({ "count": 4 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    metrics_for(&server)
        .record_search("Batman", &batman())
        .await
        .expect("record ok");
}

#[tokio::test]
async fn backend_errors_surface_as_status_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = metrics_for(&server).trending().await.unwrap_err();
    assert_eq!(err, MetricsError::HttpStatus(503));
}
