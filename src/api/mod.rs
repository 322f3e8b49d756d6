// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use std::sync::Arc;

use poem::Route;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Build the full application route: versioned API plus Swagger UI
///
/// Used by main.rs and by the integration tests, so both serve exactly the
/// same endpoint tree.
pub fn build_app(app_data: Arc<AppData>) -> Route {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(app_data)),
        "Lost and Found API",
        env!("CARGO_PKG_VERSION"),
    )
    .server("/api/v1");

    let ui = api_service.swagger_ui();

    Route::new().nest("/api/v1", api_service).nest("/swagger", ui)
}
