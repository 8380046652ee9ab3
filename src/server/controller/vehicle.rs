use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        profile::Profile,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        controller::param::VehicleListParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            page::Page,
            vehicle::{CreateVehicleParam, UpdateVehicleParam, VehicleFilter},
        },
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicles";

/// Create a new vehicle.
///
/// # Access Control
/// - `ADM`, `EDITOR`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Name, brand and model year of the vehicle
///
/// # Returns
/// - `201 Created` - Created vehicle, `Location` points at it
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/veiculos",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ValidationErrorsDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm, Profile::Editor])?;

    let Json(payload) = payload?;

    let param = CreateVehicleParam::from_dto(payload)?;
    let vehicle = VehicleService::new(&state.db).create(param).await?;

    let location = format!("/veiculos/{}", vehicle.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(vehicle.into_dto()),
    ))
}

/// Get one page of vehicles, optionally filtered by name and brand.
///
/// Filters are literal substring matches and are combined. Case sensitivity follows
/// the database: ASCII case-insensitive on SQLite, case-sensitive on Postgres.
///
/// # Access Control
/// - `ADM`, `EDITOR`
///
/// # Returns
/// - `200 OK` - Up to ten vehicles, empty past the last page
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/veiculos",
    tag = VEHICLE_TAG,
    params(
        ("pagina" = Option<i64>, Query, description = "1-indexed page number (default: 1)"),
        ("nome" = Option<String>, Query, description = "Substring of the vehicle name"),
        ("marca" = Option<String>, Query, description = "Substring of the vehicle brand")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<VehicleListParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm, Profile::Editor])?;

    let Query(params) = query?;

    let filter = VehicleFilter::new(params.nome, params.marca);
    let vehicles = VehicleService::new(&state.db)
        .list_page(Page::new(params.pagina), filter)
        .await?;

    let dtos: Vec<VehicleDto> = vehicles.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a vehicle by id.
///
/// # Access Control
/// - `ADM`, `EDITOR`
///
/// # Returns
/// - `200 OK` - The vehicle
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No vehicle with that id
#[utoipa::path(
    get,
    path = "/veiculos/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm, Profile::Editor])?;

    let Path(id) = path?;

    let vehicle = VehicleService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Replace every field of a vehicle.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `200 OK` - The updated vehicle
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `404 Not Found` - No vehicle with that id
#[utoipa::path(
    put,
    path = "/veiculos/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = UpdateVehicleDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ValidationErrorsDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdateVehicleParam::from_dto(id, payload)?;
    let vehicle = VehicleService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Delete a vehicle.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `204 No Content` - Vehicle deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `404 Not Found` - No vehicle with that id
#[utoipa::path(
    delete,
    path = "/veiculos/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted vehicle"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 404, description = "Vehicle not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Path(id) = path?;

    let deleted = VehicleService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Vehicle {} not found", id)))
    }
}
