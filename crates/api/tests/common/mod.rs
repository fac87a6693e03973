#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use divesite_api::auth::cookie::CookieConfig;
use divesite_api::auth::jwt::{generate_access_token, JwtConfig};
use divesite_api::auth::password::hash_password;
use divesite_api::config::{AppEnv, ServerConfig};
use divesite_api::router::build_app_router;
use divesite_api::state::AppState;
use divesite_core::roles::ROLE_ADMIN;
use divesite_db::models::user::{CreateUser, User};
use divesite_db::repositories::UserRepo;
use divesite_db::DbPool;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const ADMIN_EMAIL: &str = "admin@divesite.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only allowed origin, a fixed JWT
/// secret and the given upload directory.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        request_timeout_secs: 30,
        environment: AppEnv::Development,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 24,
        },
        cookie: CookieConfig::default(),
        upload_dir,
        search_case_sensitive: true,
    }
}

/// A router over a fresh in-memory database and a temporary upload
/// directory. Both live as long as this value.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub config: ServerConfig,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Build the app after letting the test adjust the config.
    pub async fn with_config(adjust: impl FnOnce(&mut ServerConfig)) -> Self {
        let upload_dir = tempfile::tempdir().expect("temp dir should be created");
        let mut config = test_config(upload_dir.path().to_path_buf());
        adjust(&mut config);

        let pool = divesite_db::create_memory_pool()
            .await
            .expect("in-memory database should open");
        let router = build_app_router(AppState::new(pool.clone(), config.clone()));

        Self {
            router,
            pool,
            config,
            upload_dir,
        }
    }

    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Insert the admin user with a real password hash.
    pub async fn seed_admin(&self) -> User {
        let password_hash = hash_password(ADMIN_PASSWORD).expect("hashing should succeed");
        UserRepo::create(
            &self.pool,
            &CreateUser {
                email: ADMIN_EMAIL.to_string(),
                name: "Reef Admin".to_string(),
                password_hash,
                role: ROLE_ADMIN.to_string(),
            },
        )
        .await
        .expect("admin creation should succeed")
    }

    /// A valid bearer token for a freshly inserted admin.
    ///
    /// Skips the password hash so tests that only need a session stay fast.
    pub async fn admin_token(&self) -> String {
        let user = UserRepo::create(
            &self.pool,
            &CreateUser {
                email: format!("{}@divesite.test", uuid::Uuid::new_v4()),
                name: "Token Admin".to_string(),
                password_hash: "not-a-real-hash".to_string(),
                role: ROLE_ADMIN.to_string(),
            },
        )
        .await
        .expect("admin creation should succeed");
        generate_access_token(&user.id, &user.role, &self.config.jwt)
            .expect("token generation should succeed")
    }

    /// Number of files currently in the upload directory.
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router should not fail")
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = builder(Method::GET, uri, token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with the session cookie instead of a bearer header.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = builder(Method::DELETE, uri, token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let request = builder(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body, token).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, token).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body, token).await
}

pub async fn send_form(
    app: Router,
    method: Method,
    uri: &str,
    form: &MultipartBody,
    token: Option<&str>,
) -> Response<Body> {
    let request = builder(method, uri, token)
        .header(CONTENT_TYPE, form.content_type())
        .body(Body::from(form.to_bytes()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(
    app: Router,
    uri: &str,
    form: &MultipartBody,
    token: Option<&str>,
) -> Response<Body> {
    send_form(app, Method::POST, uri, form, token).await
}

pub async fn put_form(
    app: Router,
    uri: &str,
    form: &MultipartBody,
    token: Option<&str>,
) -> Response<Body> {
    send_form(app, Method::PUT, uri, form, token).await
}

/// Read the full body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Assert the status and return the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "divesite-test-boundary-7MA4YWxkTrZu0gW";

enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        });
        self
    }

    /// A small PNG-looking file.
    pub fn png(self, name: &str) -> Self {
        self.file(name, "reef.png", "image/png", b"\x89PNG\r\n\x1a\nfake-image")
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text { name, value } => {
                    out.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    out.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    out.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    out.extend_from_slice(bytes);
                }
            }
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        out
    }
}
