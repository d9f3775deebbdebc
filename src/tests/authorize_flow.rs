// One-time authorization flow against a stub identity provider:
// login link, code exchange, and the provider-refusal paths.

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    use crate::authorize::{router, AuthorizeState};
    use crate::tests::common::{
        build_reqwest_client, spawn_axum, stub_credentials, stub_spotify_config,
    };

    async fn app_for(provider: &MockServer) -> axum::Router {
        let spotify = stub_spotify_config(&provider.base_url(), &provider.base_url());
        let state = AuthorizeState::new(
            &spotify,
            stub_credentials(),
            "http://127.0.0.1:5000/callback".to_string(),
        )
        .expect("authorize state");
        router(Arc::new(state))
    }

    #[tokio::test]
    async fn login_page_links_to_the_provider_authorize_endpoint() {
        let provider = MockServer::start_async().await;
        let app = app_for(&provider).await;
        let (handle, addr) = spawn_axum(app).await;
        let client = build_reqwest_client();

        let response = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 200);

        let body = response.text().await.expect("body");
        assert!(body.contains("/authorize?response_type=code"));
        assert!(body.contains("client_id=test-client"));
        assert!(body.contains("show_dialog=true"));

        handle.abort();
    }

    #[tokio::test]
    async fn callback_exchanges_code_and_renders_the_token_pair() {
        let provider = MockServer::start_async().await;
        let exchange_mock = provider.mock(|when, then| {
            when.method(POST)
                .path("/api/token")
                .body_includes("grant_type=authorization_code")
                .body_includes("code=abc-123");
            then.status(200).json_body(json!({
                "access_token": "short-lived-access",
                "refresh_token": "long-lived-refresh",
                "expires_in": 3600
            }));
        });

        let app = app_for(&provider).await;
        let (handle, addr) = spawn_axum(app).await;
        let client = build_reqwest_client();

        let response = client
            .get(format!("http://{}/callback?code=abc-123", addr))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 200);

        let body = response.text().await.expect("body");
        assert!(body.contains("short-lived-access"));
        assert!(body.contains("long-lived-refresh"));
        assert!(body.contains("expires in 3600 seconds"));
        assert_eq!(exchange_mock.hits_async().await, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn provider_refusal_on_callback_is_reported_as_400() {
        let provider = MockServer::start_async().await;
        let exchange_mock = provider.mock(|when, then| {
            when.method(POST).path("/api/token");
            then.status(200).json_body(json!({}));
        });

        let app = app_for(&provider).await;
        let (handle, addr) = spawn_axum(app).await;
        let client = build_reqwest_client();

        let response = client
            .get(format!("http://{}/callback?error=access_denied", addr))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 400);

        let body = response.text().await.expect("body");
        assert!(body.contains("access_denied"));
        // no exchange is attempted when the provider refused
        assert_eq!(exchange_mock.hits_async().await, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn failed_exchange_is_reported_as_500() {
        let provider = MockServer::start_async().await;
        provider.mock(|when, then| {
            when.method(POST).path("/api/token");
            then.status(400).json_body(json!({"error": "invalid_grant"}));
        });

        let app = app_for(&provider).await;
        let (handle, addr) = spawn_axum(app).await;
        let client = build_reqwest_client();

        let response = client
            .get(format!("http://{}/callback?code=expired-code", addr))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 500);

        let body = response.text().await.expect("body");
        // provider detail stays in the logs, not in the page
        assert!(body.contains("Token Exchange Failed"));
        assert!(!body.contains("invalid_grant"));

        handle.abort();
    }

    #[tokio::test]
    async fn callback_without_code_is_reported_as_400() {
        let provider = MockServer::start_async().await;
        let app = app_for(&provider).await;
        let (handle, addr) = spawn_axum(app).await;
        let client = build_reqwest_client();

        let response = client
            .get(format!("http://{}/callback", addr))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 400);

        handle.abort();
    }
}
