//! Tests driving the complete router over HTTP requests.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::profile::Profile,
    server::{
        model::administrator::{Administrator, CreateAdministratorParam},
        router,
        service::{
            administrator::AdministratorService, password::PasswordHasher, token::TokenService,
        },
        state::AppState,
    },
};


const SECRET: &str = "http-test-secret";

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    /// Parsed JSON body, `Value::Null` when the body is empty.
    body: Value,
}

struct TestApp {
    _test: TestContext,
    db: DatabaseConnection,
    tokens: TokenService,
    passwords: PasswordHasher,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_api_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let tokens = TokenService::new(SECRET);
        let passwords = PasswordHasher::with_params(8, 1, 1).unwrap();

        let app = router::app(AppState::new(db.clone(), tokens.clone(), passwords.clone()));

        Self {
            _test: test,
            db,
            tokens,
            passwords,
            app,
        }
    }

    /// Token for an administrator with the given profile; the guard only reads claims.
    fn token(&self, profile: Profile) -> String {
        self.tokens
            .issue(&Administrator {
                id: 1,
                email: format!("{}@teste.com", profile.as_str().to_lowercase()),
                password_hash: String::new(),
                profile,
            })
            .unwrap()
    }

    async fn create_administrator(
        &self,
        email: &str,
        password: &str,
        profile: Profile,
    ) -> Administrator {
        AdministratorService::new(&self.db, &self.passwords)
            .create(CreateAdministratorParam {
                email: email.to_string(),
                password: password.to_string(),
                profile,
            })
            .await
            .unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        match body {
            Some(body) => {
                self.send_raw(method, uri, token, Some("application/json"), body.to_string())
                    .await
            }
            None => self.send_raw(method, uri, token, None, String::new()).await,
        }
    }

    /// Sends `body` as is, with a `Content-Type` header only when one is given.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let request = request.body(Body::from(body)).unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

fn vehicle_json(name: &str, brand: &str, year: i32) -> Value {
    json!({ "name": name, "brand": brand, "year": year })
}
