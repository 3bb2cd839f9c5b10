use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, person::PersonDto},
    server::{data::person::PersonRepository, error::Error, model::app::AppState},
};

/// OpenAPI tag for people catalog routes.
pub static PEOPLE_TAG: &str = "people";

/// Get all people in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving all people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let people = person_repository.get_all().await?;

    let person_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, axum::Json(person_dtos)).into_response())
}

/// Get a single person by their catalog ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person to look up")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let person = if let Some(person) = person_repository.get_by_id(people_id).await? {
        person
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Person not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(PersonDto::from(person))).into_response())
}
