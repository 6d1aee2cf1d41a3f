//! Router-level tests for the gateway
//!
//! Run the gateway against a mock forecast API: local validation must stop
//! bad input before any outbound call, and 422/404 responses must be
//! recoverable from the back service's status codes alone.

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use httpmock::prelude::*;

    use crate::client::ForecastApiClient;
    use crate::{router, AppState};

    fn server(base_url: &str) -> TestServer {
        let state = AppState {
            forecast_client: ForecastApiClient::new(base_url).unwrap(),
        };

        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn relays_the_report_from_the_forecast_api() {
        let api = MockServer::start();
        let mock = api.mock(|when, then| {
            when.method(GET).path("/cidades/01001000/temperaturas");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "city": "São Paulo",
                    "temp_C": "25.0",
                    "temp_F": "77.0",
                    "temp_K": "299.0",
                }));
        });

        let server = server(&api.base_url());
        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({ "cep": "01001000" }))
            .await;

        mock.assert();
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "city": "São Paulo",
            "temp_C": "25.0",
            "temp_F": "77.0",
            "temp_K": "299.0",
        }));
    }

    #[tokio::test]
    async fn rejects_malformed_cep_without_calling_the_api() {
        let api = MockServer::start();
        // no matcher: counts any request that reaches the server
        let mock = api.mock(|_when, then| {
            then.status(200);
        });

        let server = server(&api.base_url());
        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({ "cep": "08931a30" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_text("invalid zipcode");
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn missing_cep_field_is_invalid() {
        let api = MockServer::start();
        let server = server(&api.base_url());

        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_text("invalid zipcode");
    }

    #[tokio::test]
    async fn recovers_invalid_zipcode_from_the_api_status() {
        let api = MockServer::start();
        api.mock(|when, then| {
            when.method(GET).path("/cidades/00000001/temperaturas");
            then.status(422).body("invalid zipcode");
        });

        let server = server(&api.base_url());
        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({ "cep": "00000001" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_text("invalid zipcode");
    }

    #[tokio::test]
    async fn recovers_not_found_from_the_api_status() {
        let api = MockServer::start();
        api.mock(|when, then| {
            when.method(GET).path("/cidades/00000000/temperaturas");
            then.status(404).body("can not find zipcode");
        });

        let server = server(&api.base_url());
        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({ "cep": "00000000" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("can not find zipcode");
    }

    #[tokio::test]
    async fn other_api_failures_become_internal_errors() {
        let api = MockServer::start();
        api.mock(|when, then| {
            when.method(GET).path("/cidades/01001000/temperaturas");
            then.status(500).body("Internal Server Error");
        });

        let server = server(&api.base_url());
        let response = server
            .post("/temperaturas")
            .json(&serde_json::json!({ "cep": "01001000" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_text("error fetching data: 500");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let api = MockServer::start();
        let server = server(&api.base_url());

        let response = server.get("/health").await;

        response.assert_status_ok();
    }
}
