use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::routes::SessionResponseBody;
use crate::modules::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::modules::content::adapter::incoming::web::routes::ReorderSkillsDto;
use crate::modules::theme::adapter::incoming::web::routes::{CustomThemeDto, ThemeUpdateDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Archfolio API",
        version = "1.0.0",
        description = "Backend for the portfolio/CV site: admin content management, \
                       theming, and the public display surface",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::session::session_handler,

        // Content (representative; the remaining entities mirror these)
        crate::modules::content::adapter::incoming::web::routes::experiences::list_experiences_handler,
        crate::modules::content::adapter::incoming::web::routes::personal::get_personal_handler,
        crate::modules::content::adapter::incoming::web::routes::projects::list_projects_handler,
        crate::modules::content::adapter::incoming::web::routes::skills::reorder_skills_handler,
        crate::modules::content::adapter::incoming::web::routes::dashboard::dashboard_handler,

        // Theme
        crate::modules::theme::adapter::incoming::web::routes::get_theme::get_theme_handler,
        crate::modules::theme::adapter::incoming::web::routes::put_theme::put_theme_handler,
        crate::modules::theme::adapter::incoming::web::routes::get_public_theme::get_public_theme_handler,
    ),
    components(
        schemas(
            SuccessResponse<SessionResponseBody>,
            ErrorResponse,
            ErrorDetail,
            LoginRequestDto,
            ReorderSkillsDto,
            ThemeUpdateDto,
            CustomThemeDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "content", description = "Admin content management"),
        (name = "theme", description = "Site theme"),
        (name = "public", description = "Public display surface"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn doc_json() -> Value {
        serde_json::to_value(ApiDoc::openapi()).expect("document serializes")
    }

    #[test]
    fn test_every_security_reference_names_a_registered_scheme() {
        let doc = doc_json();
        let schemes: Vec<String> = doc["components"]["securitySchemes"]
            .as_object()
            .expect("security schemes present")
            .keys()
            .cloned()
            .collect();
        assert_eq!(schemes, vec!["bearer_auth"]);

        let mut referenced = Vec::new();
        for (_, operations) in doc["paths"].as_object().expect("paths present") {
            for (_, operation) in operations.as_object().into_iter().flatten() {
                for requirement in operation["security"].as_array().into_iter().flatten() {
                    for name in requirement.as_object().into_iter().flatten().map(|(k, _)| k) {
                        referenced.push(name.clone());
                    }
                }
            }
        }

        assert!(!referenced.is_empty());
        for name in referenced {
            assert!(
                schemes.contains(&name),
                "security reference `{}` has no registered scheme",
                name
            );
        }
    }

    #[test]
    fn test_response_wrappers_are_registered_components() {
        let doc = doc_json();
        let schemas = doc["components"]["schemas"]
            .as_object()
            .expect("schemas present");

        assert!(schemas.contains_key("SuccessResponse_SessionResponseBody"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
