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
        administrator::{
            AdministratorDto, CreateAdministratorDto, LoggedInAdministratorDto, LoginDto,
            UpdateAdministratorDto,
        },
        api::{ErrorDto, ValidationErrorsDto},
        profile::Profile,
    },
    server::{
        controller::param::PageParam,
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{
            administrator::{CreateAdministratorParam, UpdateAdministratorParam},
            page::Page,
        },
        service::administrator::AdministratorService,
        state::AppState,
    },
};

/// Tag for grouping administrator endpoints in OpenAPI documentation
pub static ADMINISTRATOR_TAG: &str = "administrators";

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Email, profile and a bearer token valid for one hour
/// - `400 Bad Request` - Body is not a JSON login payload
/// - `401 Unauthorized` - No administrator matches the credentials
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/administradores/login",
    tag = ADMINISTRATOR_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoggedInAdministratorDto),
        (status = 400, description = "Body is not a JSON login payload", body = ValidationErrorsDto),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let administrator = AdministratorService::new(&state.db, &state.passwords)
        .validate_login(&payload.email, &payload.password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let token = state.tokens.issue(&administrator)?;

    tracing::info!("Administrator {} logged in", administrator.id);

    Ok((
        StatusCode::OK,
        Json(LoggedInAdministratorDto {
            email: administrator.email,
            profile: administrator.profile,
            token,
        }),
    ))
}

/// Create a new administrator.
///
/// # Access Control
/// - `ADM`
///
/// # Arguments
/// - `state` - Application state containing the database connection and hasher
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Email, password and profile of the new administrator
///
/// # Returns
/// - `201 Created` - Created administrator, `Location` points at it
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/administradores",
    tag = ADMINISTRATOR_TAG,
    request_body = CreateAdministratorDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created administrator", body = AdministratorDto),
        (status = 400, description = "Invalid administrator data", body = ValidationErrorsDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_administrator(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateAdministratorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Json(payload) = payload?;

    let param = CreateAdministratorParam::from_dto(payload)?;
    let administrator = AdministratorService::new(&state.db, &state.passwords)
        .create(param)
        .await?;

    let location = format!("/administradores/{}", administrator.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(administrator.into_dto()),
    ))
}

/// Get one page of administrators ordered by id.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `200 OK` - Up to ten administrators, empty past the last page
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
#[utoipa::path(
    get,
    path = "/administradores",
    tag = ADMINISTRATOR_TAG,
    params(
        ("pagina" = Option<i64>, Query, description = "1-indexed page number (default: 1)")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved administrators", body = Vec<AdministratorDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_administrators(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<PageParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Query(params) = query?;

    let administrators = AdministratorService::new(&state.db, &state.passwords)
        .list_page(Page::new(params.pagina))
        .await?;

    let dtos: Vec<AdministratorDto> = administrators
        .into_iter()
        .map(|administrator| administrator.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an administrator by id.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `200 OK` - The administrator
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `404 Not Found` - No administrator with that id
#[utoipa::path(
    get,
    path = "/administradores/{id}",
    tag = ADMINISTRATOR_TAG,
    params(
        ("id" = i32, Path, description = "Administrator id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved administrator", body = AdministratorDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 404, description = "Administrator not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_administrator_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Path(id) = path?;

    let administrator = AdministratorService::new(&state.db, &state.passwords)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Administrator {} not found", id)))?;

    Ok((StatusCode::OK, Json(administrator.into_dto())))
}

/// Replace every field of an administrator.
///
/// The payload is validated before the administrator is looked up.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `200 OK` - The updated administrator
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `404 Not Found` - No administrator with that id
#[utoipa::path(
    put,
    path = "/administradores/{id}",
    tag = ADMINISTRATOR_TAG,
    params(
        ("id" = i32, Path, description = "Administrator id")
    ),
    request_body = UpdateAdministratorDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated administrator", body = AdministratorDto),
        (status = 400, description = "Invalid administrator data", body = ValidationErrorsDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 404, description = "Administrator not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_administrator(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateAdministratorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdateAdministratorParam::from_dto(id, payload)?;
    let administrator = AdministratorService::new(&state.db, &state.passwords)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Administrator {} not found", id)))?;

    Ok((StatusCode::OK, Json(administrator.into_dto())))
}

/// Delete an administrator.
///
/// # Access Control
/// - `ADM`
///
/// # Returns
/// - `204 No Content` - Administrator deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token profile is not `ADM`
/// - `404 Not Found` - No administrator with that id
#[utoipa::path(
    delete,
    path = "/administradores/{id}",
    tag = ADMINISTRATOR_TAG,
    params(
        ("id" = i32, Path, description = "Administrator id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Successfully deleted administrator"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Profile not allowed"),
        (status = 404, description = "Administrator not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_administrator(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Profile::Adm])?;

    let Path(id) = path?;

    let deleted = AdministratorService::new(&state.db, &state.passwords)
        .delete(id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Administrator {} not found", id)))
    }
}
