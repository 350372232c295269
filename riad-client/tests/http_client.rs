//! HttpClient against a live riad-server on a loopback port

use std::net::SocketAddr;

use riad_client::{ClientConfig, ClientError, HttpClient};
use riad_server::{AppState, Config, api};
use sqlx::sqlite::SqlitePoolOptions;

const ADMIN_EMAIL: &str = "admin@riadconnect.ma";
const ADMIN_PASSWORD: &str = "atlas-mountains";

/// Serve a fresh in-memory back office and return its base URL
async fn spawn_server() -> String {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let config = Config {
        environment: "development".into(),
        database_url: "sqlite::memory:".into(),
        db_max_connections: 1,
        http_port: 0,
        admin_email: ADMIN_EMAIL.into(),
        admin_password_hash: riad_server::util::hash_password(ADMIN_PASSWORD).unwrap(),
        session_secret: "client-test-secret".into(),
        session_ttl_hours: 24,
        trusted_proxy: false,
        admin_dir: "does-not-exist".into(),
    };
    let state = AppState::with_pool(pool, &config).await.unwrap();
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url).build_http_client().unwrap()
}

#[tokio::test]
async fn update_content_is_visible_in_the_public_listing() {
    let base_url = spawn_server().await;
    let admin = client(&base_url);
    admin.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    admin
        .update_content("hero.title", "Bienvenue au riad", Some("home"))
        .await
        .unwrap();
    admin
        .update_content("footer.phone", "+212 524 000 000", None)
        .await
        .unwrap();
    admin
        .update_content("hero.title", "Marhaba", Some("home"))
        .await
        .unwrap();

    let content = client(&base_url).content().await.unwrap();
    assert_eq!(content["hero.title"], "Marhaba");
    assert_eq!(content["footer.phone"], "+212 524 000 000");
}

#[tokio::test]
async fn update_content_needs_a_session() {
    let base_url = spawn_server().await;
    let visitor = client(&base_url);

    let err = visitor
        .update_content("hero.title", "Defaced", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(visitor.content().await.unwrap().is_empty());
}

#[tokio::test]
async fn unexpected_body_is_an_invalid_response() {
    let base_url = spawn_server().await;

    let err = client(&base_url)
        .get::<Vec<i64>>("/health")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
