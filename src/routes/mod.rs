//! # Câblage des routes
//!
//! Enregistre les endpoints de l'API et applique le middleware
//! d'authentification aux routes protégées :
//!
//! | Route | Accès |
//! |-------|-------|
//! | `GET /` | public |
//! | `GET /health` | public |
//! | `POST /api/auth/register` | public |
//! | `POST /api/posts`, `GET /api/posts` | public |
//! | `DELETE /api/posts/{id}` | token requis |
//! | `GET/DELETE /api/users...` | token requis + administrateur |

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::config::JwtConfig;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// Enregistre toutes les routes de l'application.
///
/// La configuration JWT est clonée dans chaque middleware au câblage :
/// le secret est fixé une fois pour toutes au démarrage.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, jwt_config: &JwtConfig) {
    cfg.service(index);
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_post_routes(cfg, jwt_config);
    configure_user_routes(cfg, jwt_config);
}

/// Routes d'authentification (publiques).
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").service(handlers::auth::register));
}

/// Routes des posts.
///
/// Création et listing sont publics ; seule la suppression passe par le
/// middleware d'authentification, appliqué à la ressource `/{id}`.
fn configure_post_routes(cfg: &mut web::ServiceConfig, jwt_config: &JwtConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_posts)
            .service(
                web::resource("/{id}")
                    .wrap(AuthMiddleware::required(jwt_config.clone()))
                    .route(web::delete().to(handlers::posts::delete_post)),
            ),
    );
}

/// Routes d'administration des utilisateurs.
///
/// Tout le scope est réservé aux administrateurs authentifiés.
fn configure_user_routes(cfg: &mut web::ServiceConfig, jwt_config: &JwtConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::admin_only(jwt_config.clone()))
            .service(handlers::users::get_users)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user),
    );
}

/// Route racine héritée du service d'origine.
#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Tout fonctionne bien 🚀")
}

/// Endpoint de supervision.
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
