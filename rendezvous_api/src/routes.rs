use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    response::Redirect,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{optimize::post_handler::post_handler, state::AppState, venues::get_handler::get_handler};

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/venues_in_subregion") }))
        .route("/calculate_optimal_venue", post(post_handler))
        .route("/venues_in_subregion", get(get_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use rendezvous_directory::directory_client::{DirectoryClientParams, WetherspoonDirectoryClient};
    use rendezvous_matrix_providers::{
        as_the_crow_flies::CrowFliesSpeeds,
        cache::{LayeredCache, MemoryCache},
        travel_matrix_client::TravelMatrixClient,
    };
    use rendezvous_optimizer::optimizer::OptimizeParams;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method},
    };

    use super::*;

    async fn directory_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "region": "England" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "regions": [{
                    "name": "England",
                    "subRegions": [
                        {
                            "name": "London",
                            "items": [
                                { "name": "Baxter's Court", "lat": 51.5454559326172, "lng": -0.0550870001316071 },
                                { "name": "Goldengrove", "lat": 51.5418014526367, "lng": 0.00639599980786443 },
                                { "name": "Goodman's Field", "lat": 51.5117835998535, "lng": -0.0709149986505508 }
                            ]
                        },
                        { "name": "Rutland", "items": [] }
                    ]
                }]
            })))
            .mount(&server)
            .await;
        server
    }

    fn test_app(server: &MockServer) -> Router {
        app(Arc::new(AppState {
            matrix_client: TravelMatrixClient::as_the_crow_flies(
                CrowFliesSpeeds::default(),
                LayeredCache::new(MemoryCache::default(), None),
            ),
            directory: WetherspoonDirectoryClient::new(DirectoryClientParams {
                base_url: server.uri(),
                ..DirectoryClientParams::default()
            })
            .unwrap(),
            params: OptimizeParams::default(),
        }))
    }

    fn optimize_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/calculate_optimal_venue")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_optimal_venue() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(optimize_request(json!({
                "attendees": [
                    { "name": "Shoreditch", "start_point": "51.5246,-0.0786", "end_point": "51.5246,-0.0786", "travel_mode": "cycling" },
                    { "name": "Stratford", "start_point": "51.5416,-0.0034", "end_point": "51.5416,-0.0034" }
                ],
                "meeting_datetime": "2024-03-04T19:00:00Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["search_region"], "England");
        assert_eq!(body["venue_scores"].as_array().unwrap().len(), 3);
        assert_eq!(body["optimal_venue"], body["venue_scores"][0]);
        assert!(body["optimal_venue"]["score"].as_f64().is_some());
    }

    #[tokio::test]
    async fn test_naive_meeting_datetime_accepted() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(optimize_request(json!({
                "attendees": [
                    { "name": "Stratford", "start_point": "51.5416,-0.0034", "end_point": "51.5416,-0.0034" }
                ],
                "meeting_datetime": "2024-03-04T19:00:00"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["venue_scores"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_travel_mode_is_bad_request() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(optimize_request(json!({
                "attendees": [
                    { "name": "Lizz", "start_point": "51.5,-0.1", "end_point": "51.5,-0.1", "travel_mode": "hovercraft" }
                ],
                "meeting_datetime": "2024-03-04T19:00:00Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_region_is_bad_request() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(
                Request::builder()
                    .uri("/venues_in_subregion?search_region=Scotland")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_subregion_is_not_found() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(optimize_request(json!({
                "attendees": [],
                "search_subregion": "Rutland",
                "meeting_datetime": "2024-03-04T19:00:00Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_venues_in_subregion() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(
                Request::builder()
                    .uri("/venues_in_subregion?search_region=England&search_subregion=London")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["name"], "London");
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_subregion() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(
                Request::builder()
                    .uri("/venues_in_subregion?search_subregion=Atlantis")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_redirects() {
        let server = directory_server().await;

        let response = test_app(&server)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/venues_in_subregion"
        );
    }
}
