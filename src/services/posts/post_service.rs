//! # Service des posts
//!
//! Création, listing et suppression des posts. Seule la suppression est
//! soumise à autorisation : l'auteur du post ou un administrateur.

use mongodb::bson::oid::ObjectId;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{CreatePostRequest, MessageResponse, PostResponse};
use crate::domain::entities::Post;
use crate::errors::{AppError, AppResult};
use crate::repositories::PostRepository;

/// Service de gestion des posts.
#[derive(Clone)]
pub struct PostService {
    repo: PostRepository,
}

impl PostService {
    pub fn new(repo: PostRepository) -> Self {
        Self { repo }
    }

    /// Crée un nouveau post et le retourne.
    pub async fn create_post(&self, request: CreatePostRequest) -> AppResult<PostResponse> {
        let mut post = Post::new(request.title, request.content);
        let id = self.repo.insert(&post).await?;
        post.id = Some(id);

        log::info!("Post créé: {}", id.to_hex());
        Ok(PostResponse::from(post))
    }

    /// Liste tous les posts.
    pub async fn list_posts(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.repo.find_all().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Supprime un post si le principal y est autorisé.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - identifiant inconnu ou malformé
    /// * `AppError::Forbidden` - principal ni auteur ni administrateur
    pub async fn delete_post(
        &self,
        id: &str,
        user: &AuthenticatedUser,
    ) -> AppResult<MessageResponse> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound("Post non trouvé.".to_string()))?;

        let post = self
            .repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post non trouvé.".to_string()))?;

        if !can_delete(&post, user) {
            return Err(AppError::Forbidden("Non autorisé.".to_string()));
        }

        self.repo.delete_by_id(&object_id).await?;
        log::info!("Post supprimé: {}", id);
        Ok(MessageResponse::new("Post supprimé."))
    }
}

/// Prédicat d'autorisation de suppression.
///
/// Un administrateur peut tout supprimer ; sinon le principal doit être
/// l'auteur du post. Un post sans auteur ou un principal dégénéré (sans
/// `userId`) ne satisfait jamais la condition d'auteur — on refuse, on ne
/// panique pas.
fn can_delete(post: &Post, user: &AuthenticatedUser) -> bool {
    if user.is_admin() {
        return true;
    }

    match (&post.author, user.user_id()) {
        (Some(author), Some(user_id)) => author.to_hex() == user_id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::TokenPayload;
    use serde_json::json;

    fn principal(claims: serde_json::Value) -> AuthenticatedUser {
        AuthenticatedUser::from_payload(TokenPayload::Native(claims))
    }

    #[test]
    fn test_admin_can_delete_any_post() {
        let mut post = Post::new("Titre".to_string(), "Contenu".to_string());
        post.author = Some(ObjectId::new());

        let admin = principal(json!({ "userId": "quelconque", "isAdmin": true }));
        assert!(can_delete(&post, &admin));
    }

    #[test]
    fn test_author_can_delete_own_post() {
        let author_id = ObjectId::new();
        let mut post = Post::new("Titre".to_string(), "Contenu".to_string());
        post.author = Some(author_id);

        let author = principal(json!({ "userId": author_id.to_hex(), "isAdmin": false }));
        assert!(can_delete(&post, &author));
    }

    #[test]
    fn test_other_user_cannot_delete_post() {
        let mut post = Post::new("Titre".to_string(), "Contenu".to_string());
        post.author = Some(ObjectId::new());

        let other = principal(json!({ "userId": ObjectId::new().to_hex(), "isAdmin": false }));
        assert!(!can_delete(&post, &other));
    }

    #[test]
    fn test_post_without_author_requires_admin() {
        let post = Post::new("Titre".to_string(), "Contenu".to_string());

        let user = principal(json!({ "userId": ObjectId::new().to_hex(), "isAdmin": false }));
        assert!(!can_delete(&post, &user));

        let admin = principal(json!({ "userId": "admin", "isAdmin": true }));
        assert!(can_delete(&post, &admin));
    }

    #[test]
    fn test_degenerate_principal_is_denied_without_panic() {
        let mut post = Post::new("Titre".to_string(), "Contenu".to_string());
        post.author = Some(ObjectId::new());

        let degenerate = principal(json!({ "data": null, "exp": 1, "iat": 0 }));
        assert!(!can_delete(&post, &degenerate));
    }
}
