//! Projections de réponse.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Post, User};

/// Réponse générique `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Projection réduite d'un utilisateur (listing administrateur).
///
/// Équivalent de la projection `email isAdmin` du service d'origine.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Détail d'un utilisateur, sans le mot de passe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDetail {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at.to_chrono(),
        }
    }
}

/// Représentation d'un post dans les réponses.
///
/// `author` est toujours présent, sérialisé à `null` quand le post n'a pas
/// d'auteur — même forme que l'API d'origine.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id_string().unwrap_or_default(),
            title: post.title,
            content: post.content,
            author: post.author.map(|id| id.to_hex()),
            created_at: post.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_summary_drops_password() {
        let user = User::new("test@example.com".to_string(), "$2b$10$hash".to_string());
        let value = serde_json::to_value(UserSummary::from(user)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "test@example.com");
        assert_eq!(value["isAdmin"], false);
    }

    #[test]
    fn test_post_response_serializes_missing_author_as_null() {
        let post = Post::new("Titre".to_string(), "Contenu".to_string());
        let value = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert!(value["author"].is_null());
    }
}
