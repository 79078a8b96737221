//! Entité utilisateur.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Utilisateur du blog (collection `users`).
///
/// Le mot de passe est toujours stocké haché (bcrypt) ; il n'apparaît dans
/// aucune réponse HTTP (voir les DTOs de réponse).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Email de connexion (unique).
    pub email: String,
    /// Hachage bcrypt du mot de passe.
    pub password: String,
    /// Statut administrateur.
    #[serde(default)]
    pub is_admin: bool,
    /// Date de création du compte.
    pub created_at: DateTime,
}

impl User {
    /// Crée un nouvel utilisateur non administrateur.
    ///
    /// `password_hash` doit déjà être haché, jamais le mot de passe en
    /// clair.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            password: password_hash,
            is_admin: false,
            created_at: DateTime::now(),
        }
    }

    /// Identifiant sous forme de chaîne hexadécimale, si le document a
    /// déjà été inséré.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_not_admin() {
        let user = User::new("test@example.com".to_string(), "$2b$10$hash".to_string());
        assert!(!user.is_admin);
        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let mut user = User::new("test@example.com".to_string(), "$2b$10$hash".to_string());
        user.is_admin = true;
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["isAdmin"], true);
        assert!(value.get("createdAt").is_some());
    }
}
