pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::admin_credentials::AdminCredentials;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::token_blacklist_memory::InMemoryTokenBlacklist;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::rate_limiter::LoginRateLimiter;
use crate::modules::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::i18n::Translator;
use crate::modules::store::adapter::outgoing::document_store_postgres::DocumentStorePostgres;
use crate::modules::theme::application::theme_use_cases::ThemeUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub theme: ThemeUseCases,
    pub auth: AuthUseCases,
    pub translator: Translator,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Store and content services
    let store = Arc::new(DocumentStorePostgres::new(Arc::clone(&db_arc)));
    let content = ContentUseCases::build(Arc::clone(&store));
    let theme = ThemeUseCases::build(Arc::clone(&store));

    // Auth wiring: both env guards fail at startup, not on first use.
    let jwt_service = Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let credentials = Arc::new(AdminCredentials::from_env());
    let blacklist = Arc::new(InMemoryTokenBlacklist::new());
    let rate_limiter = Arc::new(LoginRateLimiter::new());

    let token_provider_arc: Arc<dyn TokenProvider> = jwt_service.clone();
    let blacklist_arc: Arc<dyn TokenBlacklist> = blacklist;

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(
            credentials,
            token_provider_arc.clone(),
            rate_limiter,
        )),
        logout: Arc::new(LogoutAdminUseCase::new(
            token_provider_arc.clone(),
            blacklist_arc.clone(),
        )),
    };

    let state = AppState {
        content,
        theme,
        auth,
        translator: Translator::new(),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_provider_arc.clone()))
            .app_data(web::Data::new(blacklist_arc.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::content::adapter::incoming::web::routes as content_routes;
    use crate::modules::theme::adapter::incoming::web::routes as theme_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_handler);
    cfg.service(auth_routes::logout_handler);
    cfg.service(auth_routes::session_handler);
    // Profile singleton
    cfg.service(content_routes::get_personal_handler);
    cfg.service(content_routes::put_personal_handler);
    // Experiences
    cfg.service(content_routes::list_experiences_handler);
    cfg.service(content_routes::get_experience_handler);
    cfg.service(content_routes::create_experience_handler);
    cfg.service(content_routes::update_experience_handler);
    cfg.service(content_routes::delete_experience_handler);
    // Education
    cfg.service(content_routes::list_education_handler);
    cfg.service(content_routes::get_education_handler);
    cfg.service(content_routes::create_education_handler);
    cfg.service(content_routes::update_education_handler);
    cfg.service(content_routes::delete_education_handler);
    // Certifications
    cfg.service(content_routes::list_certifications_handler);
    cfg.service(content_routes::get_certification_handler);
    cfg.service(content_routes::create_certification_handler);
    cfg.service(content_routes::update_certification_handler);
    cfg.service(content_routes::delete_certification_handler);
    // Skills; the reorder route registers before the `{id}` routes so
    // `/order` does not match as an id
    cfg.service(content_routes::list_skills_handler);
    cfg.service(content_routes::reorder_skills_handler);
    cfg.service(content_routes::get_skill_handler);
    cfg.service(content_routes::create_skill_handler);
    cfg.service(content_routes::update_skill_handler);
    cfg.service(content_routes::delete_skill_handler);
    // Projects
    cfg.service(content_routes::list_projects_handler);
    cfg.service(content_routes::get_project_handler);
    cfg.service(content_routes::create_project_handler);
    cfg.service(content_routes::update_project_handler);
    cfg.service(content_routes::delete_project_handler);
    // Dashboard
    cfg.service(content_routes::dashboard_handler);
    // Theme
    cfg.service(theme_routes::get_theme_handler);
    cfg.service(theme_routes::put_theme_handler);
    cfg.service(theme_routes::get_public_theme_handler);
    // Public site
    cfg.service(content_routes::public_personal_handler);
    cfg.service(content_routes::public_experiences_handler);
    cfg.service(content_routes::public_education_handler);
    cfg.service(content_routes::public_certifications_handler);
    cfg.service(content_routes::public_skills_handler);
    cfg.service(content_routes::public_projects_handler);
    cfg.service(content_routes::public_project_detail_handler);
    cfg.service(content_routes::public_translations_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
