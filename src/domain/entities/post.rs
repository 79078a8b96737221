//! Entité post de blog.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Post de blog (collection `posts`).
///
/// L'auteur est optionnel : les posts créés sans authentification n'en ont
/// pas, et le reste du code doit le tolérer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    /// Référence vers l'utilisateur auteur, si connue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<ObjectId>,
    pub created_at: DateTime,
}

impl Post {
    /// Crée un nouveau post, sans auteur.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: None,
            title,
            content,
            author: None,
            created_at: DateTime::now(),
        }
    }

    /// Identifiant sous forme de chaîne hexadécimale, si inséré.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
