//! Handlers des posts.
//!
//! Création et listing sont publics ; la suppression exige un token valide
//! (middleware appliqué au câblage des routes) et n'est permise qu'à
//! l'auteur du post ou à un administrateur.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::CreatePostRequest;
use crate::errors::AppError;
use crate::services::posts::PostService;

/// `POST /api/posts` — crée un post, répond 201 avec le post créé.
#[post("")]
pub async fn create_post(
    payload: web::Json<CreatePostRequest>,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::Validation("Titre et contenu requis.".to_string()))?;

    let post = service.create_post(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// `GET /api/posts` — liste tous les posts, `author` à `null` si absent.
#[get("")]
pub async fn get_posts(service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let posts = service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// `DELETE /api/posts/{id}` — supprime un post (auteur ou administrateur).
///
/// Enregistré sans macro d'attribut : la route est câblée via
/// `web::resource` pour recevoir le middleware d'authentification.
pub async fn delete_post(
    path: web::Path<String>,
    user: AuthenticatedUser,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_post(&path.into_inner(), &user).await?;
    Ok(HttpResponse::Ok().json(response))
}
