use axum::{http::Method, routing::get};

use super::Route;

async fn healthz() -> &'static str {
    "ok"
}

pub fn routes() -> Vec<Route> {
    vec![Route::new(Method::GET, "/healthz", "liveness probe", get(healthz))]
}
