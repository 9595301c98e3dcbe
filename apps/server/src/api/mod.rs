//! HTTP surface: the route table and the router built from it.

mod accounts;
mod health;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ApiError, main_lib::AppState};

/// One entry of the route table. Fixed at startup.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub description: &'static str,
    pub handler: MethodRouter<Arc<AppState>>,
}

impl Route {
    pub fn new(
        method: Method,
        path: &'static str,
        description: &'static str,
        handler: MethodRouter<Arc<AppState>>,
    ) -> Self {
        Self {
            method,
            path,
            description,
            handler,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub method: String,
    pub path: &'static str,
    pub description: &'static str,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            method: route.method.as_str().to_string(),
            path: route.path,
            description: route.description,
        }
    }
}

/// Every route the server answers.
pub fn route_table() -> Vec<Route> {
    let mut table = accounts::routes();
    table.extend(health::routes());
    table.push(Route::new(
        Method::GET,
        "/routes",
        "list the route table",
        get(list_routes),
    ));
    table
}

async fn list_routes() -> Json<Vec<RouteSummary>> {
    Json(route_table().iter().map(RouteSummary::from).collect())
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

/// Bounds each request by `timeout`. An expired request answers 408 with the
/// usual JSON error body.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    let millis = timeout.as_millis();
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(map_response(move |response: Response| async move {
            if response.status() == StatusCode::REQUEST_TIMEOUT {
                ApiError::Timeout(millis).into_response()
            } else {
                response
            }
        }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let router = route_table()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::info!(
                method = %route.method,
                path = route.path,
                "Registering route: {}",
                route.description
            );
            router.route(route.path, route.handler)
        });

    let router = router.with_state(state).layer(cors_layer(config));

    // Layers added later wrap the earlier ones, so the id is set before
    // propagation copies it onto the response.
    with_timeout(router, config.request_timeout)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
