//! # Service utilisateurs
//!
//! Inscription et administration des comptes. Les mots de passe sont hachés
//! avec bcrypt (coût 10, comme le service d'origine) avant toute insertion ;
//! le mot de passe en clair ne quitte jamais ce module.

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{MessageResponse, RegisterRequest, UserDetail, UserSummary};
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

/// Coût bcrypt utilisé pour le hachage des mots de passe.
const BCRYPT_COST: u32 = 10;

/// Service de gestion des utilisateurs.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Inscrit un nouvel utilisateur.
    ///
    /// # Errors
    ///
    /// * `AppError::Conflict` - email déjà utilisé
    /// * `AppError::Internal` - échec du hachage bcrypt
    /// * `AppError::Database` - erreur MongoDB
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        if self.repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict("Cet email est déjà utilisé.".to_string()));
        }

        let password_hash = bcrypt::hash(&request.password, BCRYPT_COST)
            .map_err(|e| AppError::Internal(format!("Hachage du mot de passe: {}", e)))?;

        let user = User::new(request.email, password_hash);
        self.repo.insert(&user).await?;

        log::info!("Utilisateur créé: {}", user.email);
        Ok(MessageResponse::new("Utilisateur créé."))
    }

    /// Liste tous les utilisateurs en projection réduite (email, isAdmin).
    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    /// Détail d'un utilisateur, sans le mot de passe.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - identifiant inconnu ou malformé
    pub async fn get_user(&self, id: &str) -> AppResult<UserDetail> {
        let object_id = parse_user_id(id)?;
        let user = self
            .repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Utilisateur non trouvé.".to_string()))?;

        Ok(UserDetail::from(user))
    }

    /// Supprime un utilisateur.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - identifiant inconnu ou malformé
    pub async fn delete_user(&self, id: &str) -> AppResult<MessageResponse> {
        let object_id = parse_user_id(id)?;
        if !self.repo.delete_by_id(&object_id).await? {
            return Err(AppError::NotFound("Utilisateur non trouvé.".to_string()));
        }

        log::info!("Utilisateur supprimé: {}", id);
        Ok(MessageResponse::new("Utilisateur supprimé."))
    }
}

/// Un identifiant malformé désigne forcément un utilisateur inexistant.
fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound("Utilisateur non trouvé.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_id_maps_to_not_found() {
        let err = parse_user_id("pas-un-objectid").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_valid_object_id_is_parsed() {
        let id = ObjectId::new();
        assert_eq!(parse_user_id(&id.to_hex()).unwrap(), id);
    }
}
