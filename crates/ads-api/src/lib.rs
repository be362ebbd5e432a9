//! ads-api - ADS REST gateway with generic handlers
//!
//! This crate maps HTTP requests onto the [`DeviceClient`] trait and wraps
//! every outcome in the same envelope: the bare JSON payload with status 200,
//! or `{"error":"<message>"}` with status 500. It is backend-agnostic.
//!
//! # Usage
//!
//! ```ignore
//! use ads_api::{attach, Gateway, GatewayOptions};
//! use ads_sim::SimulatedDevice;
//!
//! let gateway = Gateway::new(SimulatedDevice::demo());
//! let app = attach(axum::Router::new(), gateway, &GatewayOptions::default());
//! ```

pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use envelope::Payload;
pub use error::ApiError;
pub use state::Gateway;

use ads_core::DeviceClient;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Where and how the gateway routes are mounted
#[derive(Debug, Clone, Default)]
pub struct GatewayOptions {
    /// Path prefix for every route ("" mounts at the root)
    pub base_path: String,
    /// Also mount the first-generation paths (`/device/info`, `/symbol/...`)
    pub legacy_routes: bool,
}

/// Build the gateway's own routes, already bound to its state
pub fn routes<D: DeviceClient>(gateway: Gateway<D>, legacy_routes: bool) -> Router {
    let mut router = Router::new()
        .route("/version", get(handlers::device::get_version::<D>))
        .route(
            "/state",
            get(handlers::device::get_state::<D>).post(handlers::device::set_state::<D>),
        )
        .route("/deviceInfo", get(handlers::device::get_device_info::<D>))
        // Symbol metadata
        .route("/symbolInfo", get(handlers::symbols::get_symbol_table::<D>))
        .route(
            "/symbolInfo/{name}",
            get(handlers::symbols::get_symbol_info::<D>),
        )
        // Symbol values
        .route(
            "/symbolValue/{name}",
            get(handlers::symbols::get_symbol_value::<D>)
                .post(handlers::symbols::set_symbol_value::<D>),
        )
        .route("/symbolList", get(handlers::symbols::list_symbols::<D>));

    if legacy_routes {
        router = router
            .route("/device/info", get(handlers::device::get_device_info::<D>))
            .route("/symbol", get(handlers::symbols::get_symbol_table::<D>))
            .route("/symbol/{name}", get(handlers::symbols::get_symbol_info::<D>))
            .route(
                "/symbol/{name}/value",
                get(handlers::symbols::get_symbol_value::<D>)
                    .post(handlers::symbols::set_symbol_value::<D>),
            );
    }

    router.with_state(gateway)
}

/// Register the gateway on a router owned by the host process.
///
/// The host keeps control of listening, shutdown and middleware.
pub fn attach<D: DeviceClient>(
    router: Router,
    gateway: Gateway<D>,
    options: &GatewayOptions,
) -> Router {
    let gateway_routes = routes(gateway, options.legacy_routes);
    match normalize_base_path(&options.base_path) {
        Some(prefix) => router.nest(&prefix, gateway_routes),
        None => router.merge(gateway_routes),
    }
}

/// Create a standalone router with HTTP tracing and permissive CORS
pub fn create_router<D: DeviceClient>(gateway: Gateway<D>, options: &GatewayOptions) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    attach(Router::new(), gateway, options)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// `""`, `"/"` -> root; `"api/"` -> `"/api"`
fn normalize_base_path(base_path: &str) -> Option<String> {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}
