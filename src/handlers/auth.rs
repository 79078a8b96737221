//! Handlers d'authentification.
//!
//! Seule l'inscription est exposée. La connexion n'émet pas de token ici :
//! les administrateurs s'authentifient auprès de l'API d'administration
//! externe, qui signe ses propres tokens avec le secret partagé.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::RegisterRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// `POST /api/auth/register`
///
/// Inscription d'un nouvel utilisateur non administrateur.
///
/// | Cas | Statut | Corps |
/// |-----|--------|-------|
/// | succès | 201 | `{"message": "Utilisateur créé."}` |
/// | champ manquant | 400 | `{"message": "Email et mot de passe requis."}` |
/// | email déjà pris | 409 | `{"message": "Cet email est déjà utilisé."}` |
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|_| AppError::Validation("Email et mot de passe requis.".to_string()))?;

    let response = service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}
