//! Handlers d'administration des utilisateurs.
//!
//! Tout le scope `/api/users` est derrière `AuthMiddleware::admin_only` :
//! ces handlers ne s'exécutent que pour un principal administrateur.

use actix_web::{HttpResponse, delete, get, web};

use crate::errors::AppError;
use crate::services::users::UserService;

/// `GET /api/users` — liste tous les utilisateurs (email, isAdmin).
#[get("")]
pub async fn get_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// `GET /api/users/{id}` — détail d'un utilisateur, sans le mot de passe.
#[get("/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// `DELETE /api/users/{id}` — supprime un utilisateur.
#[delete("/{id}")]
pub async fn delete_user(
    path: web::Path<String>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
