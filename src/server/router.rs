//! Route table and OpenAPI document.

use axum::{routing::get, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        administrator::{
            AdministratorDto, CreateAdministratorDto, LoggedInAdministratorDto, LoginDto,
            UpdateAdministratorDto,
        },
        api::{ErrorDto, HomeDto, ValidationErrorsDto},
        profile::Profile,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        controller::{
            administrator::{
                create_administrator, delete_administrator, get_administrator_by_id,
                get_administrators, login, update_administrator,
            },
            home::home,
            vehicle::{
                create_vehicle, delete_vehicle, get_vehicle_by_id, get_vehicles, update_vehicle,
            },
        },
        state::AppState,
    },
};

/// Adds the `bearer` JWT security scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /administradores/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Vehicle API",
        description = "Administrator and vehicle management with bearer token authentication."
    ),
    paths(
        crate::server::controller::home::home,
        crate::server::controller::administrator::login,
        crate::server::controller::administrator::create_administrator,
        crate::server::controller::administrator::get_administrators,
        crate::server::controller::administrator::get_administrator_by_id,
        crate::server::controller::administrator::update_administrator,
        crate::server::controller::administrator::delete_administrator,
        crate::server::controller::vehicle::create_vehicle,
        crate::server::controller::vehicle::get_vehicles,
        crate::server::controller::vehicle::get_vehicle_by_id,
        crate::server::controller::vehicle::update_vehicle,
        crate::server::controller::vehicle::delete_vehicle,
    ),
    components(schemas(
        HomeDto,
        ErrorDto,
        ValidationErrorsDto,
        Profile,
        LoginDto,
        LoggedInAdministratorDto,
        AdministratorDto,
        CreateAdministratorDto,
        UpdateAdministratorDto,
        VehicleDto,
        CreateVehicleDto,
        UpdateVehicleDto,
    )),
    tags(
        (name = "home", description = "API root"),
        (name = "administrators", description = "Login and administrator management"),
        (name = "vehicles", description = "Vehicle catalog")
    )
)]
pub struct ApiDoc;

/// Routes of the API without state or layers applied.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/administradores/login", post(login))
        .route(
            "/administradores",
            post(create_administrator).get(get_administrators),
        )
        .route(
            "/administradores/{id}",
            get(get_administrator_by_id)
                .put(update_administrator)
                .delete(delete_administrator),
        )
        .route("/veiculos", post(create_vehicle).get(get_vehicles))
        .route(
            "/veiculos/{id}",
            get(get_vehicle_by_id)
                .put(update_vehicle)
                .delete(delete_vehicle),
        )
}

/// Complete application: API routes, Swagger UI at `/swagger`, tracing and CORS.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
