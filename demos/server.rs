use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use goldflake::{decompose, Decomposed, Goldflake, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn machine_id() -> Result<u16, goldflake::BoxError> {
    Ok(1234)
}

async fn handler(
    State(generator): State<Arc<Goldflake>>,
) -> Result<Json<Decomposed>, (StatusCode, String)> {
    // next_id may stall for a tick while holding the lock
    let id = tokio::task::spawn_blocking(move || generator.next_id())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(decompose(id)))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::builder().machine_id(machine_id).build();
    let generator = Arc::new(Goldflake::new(settings).expect("goldflake not created"));

    let app = Router::new().route("/", get(handler)).with_state(generator);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Server running on http://localhost:8080");
    axum::serve(listener, app).await.unwrap();
}
