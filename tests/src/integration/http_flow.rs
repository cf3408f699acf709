//! # HTTP Integration Flow
//!
//! The address resolver (02) driving the real HTTP client (01) against a
//! stub suggestion service bound to 127.0.0.1.
//!
//! ## Flow Tested:
//!
//! 1. **Wire scoping**: an accepted settlement scopes the street request
//!    body with `settlement_fias_id`
//! 2. **Remote failure**: a 5xx answer empties the field without an error
//!    reaching the caller

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    use tp_01_address_suggest::{DaDataClient, SuggestConfig};
    use tp_02_address_resolver::{
        AddressField, AddressFormApi, CascadingResolver, FieldState, RecordingSurface,
        ResolverConfig,
    };

    // =============================================================================
    // STUB SERVICE
    // =============================================================================

    type Requests = Arc<Mutex<Vec<(String, Value)>>>;

    /// Serve canned answers keyed by the request's `query`; unknown queries
    /// get a 500.
    async fn spawn_service(answers: HashMap<&'static str, Value>) -> (String, Requests) {
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));
        let sink = requests.clone();
        let answers = Arc::new(answers);

        let app = Router::new().route(
            "/suggest",
            post(move |headers: HeaderMap, Json(payload): Json<Value>| {
                let sink = sink.clone();
                let answers = answers.clone();
                async move {
                    let authorization = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let query = payload["query"].as_str().unwrap_or_default().to_string();
                    sink.lock().push((authorization, payload));

                    match answers.get(query.as_str()) {
                        Some(body) => (StatusCode::OK, Json(body.clone())),
                        None => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({"message": "unavailable"})),
                        ),
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/suggest", addr), requests)
    }

    fn form_for(url: String) -> (CascadingResolver<DaDataClient, RecordingSurface>, RecordingSurface) {
        let client = DaDataClient::new(&SuggestConfig::for_testing(url)).unwrap();
        let surface = RecordingSurface::new();
        let form = CascadingResolver::new(Arc::new(client), surface.clone(), ResolverConfig::default());
        (form, surface)
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_settlement_scopes_street_over_http() {
        let answers = HashMap::from([
            (
                "Коммун",
                json!({"suggestions": [{
                    "value": "г Москва, поселок Коммунарка",
                    "unrestricted_value": "108802, г Москва, поселок Коммунарка",
                    "data": {
                        "region_fias_id": "0c5b2444-70a0-4932-980c-b4dc0d3f02b5",
                        "region_with_type": "г Москва",
                        "city_fias_id": null,
                        "settlement_fias_id": "settlement-kommunarka",
                        "settlement_with_type": "поселок Коммунарка",
                        "postal_code": "108802"
                    }
                }]}),
            ),
            (
                "Ал",
                json!({"suggestions": [{
                    "value": "ул Александры Монаховой",
                    "data": {
                        "region_with_type": "г Москва",
                        "settlement_with_type": "поселок Коммунарка",
                        "street_fias_id": "street-monakhovoy",
                        "street_with_type": "ул Александры Монаховой",
                        "postal_code": "108802"
                    }
                }]}),
            ),
        ]);
        let (url, requests) = spawn_service(answers).await;
        let (mut form, surface) = form_for(url);

        form.text_changed(AddressField::City, "Коммун");
        assert_eq!(form.settle().await, 1);
        assert_eq!(
            surface.last_candidates(AddressField::City),
            vec!["г Москва, поселок Коммунарка"]
        );
        form.candidate_chosen(AddressField::City, 0).unwrap();

        form.text_changed(AddressField::Street, "Ал");
        form.settle().await;
        form.candidate_chosen(AddressField::Street, 0).unwrap();
        form.set_building("2");

        let requests = requests.lock().clone();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|(auth, _)| auth == "Token test-token"));

        let city_body = &requests[0].1;
        assert_eq!(city_body["from_bound"], json!({"value": "city"}));
        assert_eq!(city_body["count"], json!(20));
        assert!(city_body.get("locations").is_none());

        let street_body = &requests[1].1;
        assert_eq!(street_body["to_bound"], json!({"value": "street"}));
        assert_eq!(
            street_body["locations"],
            json!([{"settlement_fias_id": "settlement-kommunarka"}])
        );

        assert_eq!(
            form.compose_full_address(),
            "108802, г Москва, поселок Коммунарка, ул Александры Монаховой, корп. 2"
        );
    }

    #[tokio::test]
    async fn test_remote_failure_is_silent() {
        let (url, requests) = spawn_service(HashMap::new()).await;
        let (mut form, surface) = form_for(url);

        assert!(form.text_changed(AddressField::Region, "Моск"));
        assert_eq!(form.settle().await, 1);

        assert_eq!(requests.lock().len(), 1);
        assert_eq!(form.field(AddressField::Region).state, FieldState::Empty);
        assert!(!surface.is_visible(AddressField::Region));
        assert_eq!(form.compose_full_address(), "Моск");
    }
}
