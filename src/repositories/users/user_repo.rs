//! Repository des utilisateurs (collection `users`).

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};

use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};

/// Accès à la collection `users`.
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.database().collection::<User>("users"),
        }
    }

    /// Recherche un utilisateur par email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::Database(format!("Recherche par email: {}", e)))
    }

    /// Recherche un utilisateur par identifiant.
    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(format!("Recherche par id: {}", e)))
    }

    /// Liste tous les utilisateurs.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(format!("Listing des utilisateurs: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Lecture du curseur: {}", e)))
    }

    /// Insère un nouvel utilisateur et retourne son identifiant.
    pub async fn insert(&self, user: &User) -> AppResult<ObjectId> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(|e| AppError::Database(format!("Insertion utilisateur: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Identifiant inséré inattendu".to_string()))
    }

    /// Supprime un utilisateur ; retourne `false` s'il n'existait pas.
    pub async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(format!("Suppression utilisateur: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}
