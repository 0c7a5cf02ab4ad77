//! Test client helpers.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use glossa_server::auth::password::hash_password;
use glossa_server::{AppState, create_router_with_state};
use glossa_store::Database;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::json;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "secret";

/// Construye la aplicacion completa sobre un store en memoria, con el
/// usuario admin ya creado. Retorna tambien el handle al store para
/// seeding directo.
pub fn app() -> (Router, Database) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    db.create_user(ADMIN_EMAIL, &hash_password(ADMIN_PASSWORD))
        .expect("Failed to seed admin user");

    // build_recorder avoids installing a process-global recorder, so
    // every test can hold its own handle
    let handle = PrometheusBuilder::new().build_recorder().handle();

    let app = create_router_with_state(AppState::new(db.clone()), handle);
    (app, db)
}

/// Helper para tests de integracion HTTP.
pub struct TestClient {
    app: Router,
    db: Database,
    token: Option<String>,
}

impl TestClient {
    /// Crea un nuevo test client con el router y store proporcionados.
    pub fn new(app: Router, db: Database) -> Self {
        Self {
            app,
            db,
            token: None,
        }
    }

    /// Direct handle to the store behind the app, for seeding.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Clones this client against the same app, without a token.
    pub fn fresh(&self) -> Self {
        Self {
            app: self.app.clone(),
            db: self.db.clone(),
            token: None,
        }
    }

    /// Attaches a bearer token sent with every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Logs in through the API and keeps the returned token.
    pub async fn login(self) -> Self {
        let response = self
            .post(
                "/api/login",
                &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
            )
            .await;
        response.assert_status(StatusCode::OK);

        let body: serde_json::Value = response.json();
        let token = body["token"].as_str().expect("login returned no token");

        self.with_token(token.to_string())
    }

    /// Returns the token held by this client.
    pub fn token(&self) -> &str {
        self.token.as_deref().expect("client has no token")
    }

    /// Hace un GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(self.builder(uri, "GET").body(Body::empty()).unwrap())
            .await
    }

    /// Hace un GET request con headers personalizados.
    pub async fn get_with_headers(&self, uri: &str, headers: Vec<(&str, &str)>) -> TestResponse {
        let mut builder = self.builder(uri, "GET");

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Hace un POST request con body JSON.
    pub async fn post(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        self.request(
            self.builder(uri, "POST")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Hace un POST request sin body.
    pub async fn post_empty(&self, uri: &str) -> TestResponse {
        self.request(self.builder(uri, "POST").body(Body::empty()).unwrap())
            .await
    }

    /// Hace un PUT request con body JSON.
    pub async fn put(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        self.request(
            self.builder(uri, "PUT")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Hace un DELETE request.
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(self.builder(uri, "DELETE").body(Body::empty()).unwrap())
            .await
    }

    fn builder(&self, uri: &str, method: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().uri(uri).method(method);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
    }

    /// Ejecuta un request arbitrario.
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        TestResponse::from_response(response).await
    }
}

/// Wrapper sobre Response con helpers para assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    async fn from_response(response: Response<Body>) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();

        Self {
            status,
            headers,
            body,
        }
    }

    /// Retorna el body como string.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Body is not valid UTF-8")
    }

    /// Parsea el body como JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON")
    }

    /// Retorna un header especifico.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Verifica que el status sea el esperado.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
        self
    }

    /// Verifica que un header exista.
    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(
            self.headers.contains_key(name),
            "Expected header '{}' to exist",
            name
        );
        self
    }

    /// Verifica que un header tenga un valor especifico.
    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        let value = self
            .header(name)
            .unwrap_or_else(|| panic!("Header '{}' not found", name));

        assert_eq!(
            value, expected,
            "Expected header '{}' to be '{}' but got '{}'",
            name, expected, value
        );
        self
    }
}

/// Crea un TestClient sin token.
pub fn client() -> TestClient {
    let (router, db) = app();
    TestClient::new(router, db)
}

/// Crea un TestClient ya autenticado.
pub async fn authed_client() -> TestClient {
    client().login().await
}
