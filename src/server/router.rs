//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with their
//! OpenAPI specifications, and Swagger UI is configured to provide interactive API
//! documentation at `/apidocs`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Constructs an Axum router with the catalog, user, and favorite endpoints
/// registered. Each endpoint is annotated with OpenAPI specifications via utoipa,
/// which are collected into a unified OpenAPI document served alongside Swagger UI.
///
/// # Registered Endpoints
/// - `GET /people` - List every person in the catalog
/// - `GET /people/{people_id}` - Get one person by ID
/// - `GET /planets` - List every planet in the catalog
/// - `GET /planets/{planet_id}` - Get one planet by ID
/// - `GET /users` - List every registered user
/// - `GET /users/favorites` - List the current user's favorites
/// - `POST /favorite/planet/{planet_id}` - Favorite a planet for the current user
/// - `DELETE /favorite/planet/{planet_id}` - Unfavorite a planet for the current user
/// - `POST /favorite/people/{people_id}` - Favorite a person for the current user
/// - `DELETE /favorite/people/{people_id}` - Unfavorite a person for the current user
///
/// # Swagger UI
/// Interactive API documentation is served at `/apidocs`, with the OpenAPI
/// specification available at `/apidocs/openapi.json`. The root path redirects to
/// the documentation, and unmatched routes receive a JSON 404 body.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Star Wars Blog API", description = "Catalog and favorites API for the Star Wars blog"), tags(
        (name = controller::people::PEOPLE_TAG, description = "Operations on catalog people"),
        (name = controller::planet::PLANET_TAG, description = "Operations on catalog planets"),
        (name = controller::user::USER_TAG, description = "Operations on users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Add or remove favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/apidocs").url("/apidocs/openapi.json", api))
        .route("/", get(index))
        .fallback(not_found)
}

/// Redirects the root path to the Swagger UI.
async fn index() -> Redirect {
    Redirect::to("/apidocs")
}

/// JSON body for any route the router does not know.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
