//! # Gestion des erreurs applicatives
//!
//! Système d'erreurs unifié du backend. Chaque variante de [`AppError`]
//! correspond à une situation métier précise et se convertit automatiquement
//! en réponse HTTP via l'implémentation de `actix_web::ResponseError`.
//!
//! ## Contrat de réponse
//!
//! Toutes les erreurs produisent un corps JSON de la forme :
//!
//! ```json
//! { "message": "Texte lisible en français" }
//! ```
//!
//! ## Correspondance des statuts HTTP
//!
//! | Variante | Statut | Corps |
//! |----------|--------|-------|
//! | `MissingToken` | 401 | "Token manquant." |
//! | `InvalidToken` | 403 | "Token invalide." |
//! | `AdminOnly` | 403 | "Accès réservé aux administrateurs." |
//! | `Forbidden` | 403 | message porté par la variante |
//! | `Validation` | 400 | message porté par la variante |
//! | `NotFound` | 404 | message porté par la variante |
//! | `Conflict` | 409 | message porté par la variante |
//! | `Database` / `Internal` | 500 | "Erreur serveur." |
//!
//! Les erreurs 5xx ne divulguent jamais leur cause au client : le détail
//! est journalisé côté serveur et le corps de réponse est toujours
//! « Erreur serveur. », comme le faisait le service d'origine.

use thiserror::Error;

/// Erreur applicative globale.
///
/// Les trois premières variantes forment la taxonomie du contrôle d'accès :
/// `MissingToken` (aucun credential exploitable), `InvalidToken` (token
/// présent mais rejeté par la vérification cryptographique ou temporelle)
/// et `AdminOnly` (token valide mais privilèges insuffisants). Toutes sont
/// terminales pour la requête en cours ; aucune n'est fatale au processus.
#[derive(Error, Debug)]
pub enum AppError {
    /// Aucun token exploitable dans l'en-tête `Authorization`.
    #[error("Token manquant.")]
    MissingToken,

    /// Token présent mais signature invalide, forme incorrecte ou expiré.
    #[error("Token invalide.")]
    InvalidToken,

    /// Route réservée aux administrateurs, principal non admin.
    #[error("Accès réservé aux administrateurs.")]
    AdminOnly,

    /// Accès refusé pour une autre raison (ex : suppression d'un post
    /// dont on n'est ni l'auteur ni administrateur).
    #[error("{0}")]
    Forbidden(String),

    /// Données de requête invalides.
    #[error("{0}")]
    Validation(String),

    /// Ressource introuvable.
    #[error("{0}")]
    NotFound(String),

    /// Conflit métier (ex : email déjà utilisé).
    #[error("{0}")]
    Conflict(String),

    /// Erreur MongoDB. Le détail n'est jamais exposé au client.
    #[error("Erreur de base de données: {0}")]
    Database(String),

    /// Erreur interne inattendue. Le détail n'est jamais exposé au client.
    #[error("Erreur interne: {0}")]
    Internal(String),
}

impl actix_web::ResponseError for AppError {
    /// Convertit l'erreur en réponse HTTP `{"message": ...}`.
    ///
    /// Les variantes 5xx journalisent leur cause et répondent uniformément
    /// « Erreur serveur. » pour ne pas exposer d'information interne.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::AdminOnly => StatusCode::FORBIDDEN,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status.is_server_error() {
            log::error!("Erreur serveur: {}", self);
            "Erreur serveur.".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "message": message
        }))
    }
}

/// Alias de résultat utilisé dans toute l'application.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    async fn body_message(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_missing_token_response() {
        let (status, body) = body_message(AppError::MissingToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Token manquant.");
    }

    #[actix_web::test]
    async fn test_invalid_token_response() {
        let (status, body) = body_message(AppError::InvalidToken).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Token invalide.");
    }

    #[actix_web::test]
    async fn test_admin_only_response() {
        let (status, body) = body_message(AppError::AdminOnly).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Accès réservé aux administrateurs.");
    }

    #[actix_web::test]
    async fn test_conflict_response_keeps_message() {
        let (status, body) =
            body_message(AppError::Conflict("Cet email est déjà utilisé.".to_string())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Cet email est déjà utilisé.");
    }

    #[actix_web::test]
    async fn test_server_errors_never_leak_details() {
        let (status, body) =
            body_message(AppError::Database("connection refused".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Erreur serveur.");

        let (status, body) = body_message(AppError::Internal("panic averted".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Erreur serveur.");
    }
}
