use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    campaigns::CampaignsEndpoints, health::HealthEndpoints, root::ApiState,
    templates::TemplatesEndpoints,
};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

/// API under `/api`, Swagger UI at `/`.
pub fn app(state: Arc<ApiState>, server_url: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            TemplatesEndpoints::new(state.clone()),
            CampaignsEndpoints::new(state),
        ),
        "Campaigns API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Cors::new())
        .with(Tracing)
}
