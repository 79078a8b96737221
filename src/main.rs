//! Point d'entrée du backend de blog.
//!
//! Démarre le serveur HTTP Actix-web, initialise la connexion MongoDB et
//! construit explicitement les services avant de les injecter dans
//! l'application. Configuration par variables d'environnement (fichiers
//! `.env` par profil).

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use blog_service_backend::config::{DatabaseConfig, JwtConfig, ServerConfig};
use blog_service_backend::db::Database;
use blog_service_backend::repositories::{PostRepository, UserRepository};
use blog_service_backend::routes::configure_all_routes;
use blog_service_backend::services::posts::PostService;
use blog_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Démarrage du backend de blog...");

    // Configuration lue une seule fois, injectée ensuite.
    let jwt_config = JwtConfig::from_env();
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    // Connexion MongoDB, vérifiée par ping.
    let database = Database::connect(&database_config)
        .await
        .expect("Connexion MongoDB échouée");

    // Construction explicite des services.
    let user_service = UserService::new(UserRepository::new(&database));
    let post_service = PostService::new(PostRepository::new(&database));

    let bind_address = server_config.bind_address();
    info!("🌐 Serveur en écoute sur http://{}", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let jwt_config = jwt_config.clone();

        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(post_service.clone()))
            .configure(|cfg| configure_all_routes(cfg, &jwt_config))
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// Charge le fichier d'environnement selon le profil actif.
///
/// `PROFILE=prod` charge `.env.prod`, `PROFILE=dev` charge `.env.dev`,
/// sinon le `.env` par défaut.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!("Fichier .env.prod chargé"),
            Err(e) => error!("Échec du chargement de .env.prod: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!("Fichier .env.dev chargé"),
            Err(e) => error!("Échec du chargement de .env.dev: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("Fichier .env par défaut chargé");
        }
    }
}

/// Initialise la journalisation depuis `RUST_LOG` (défaut: info).
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS permissif, comme le service d'origine.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
