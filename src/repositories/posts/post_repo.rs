//! Repository des posts (collection `posts`).

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};

use crate::db::Database;
use crate::domain::entities::Post;
use crate::errors::{AppError, AppResult};

/// Accès à la collection `posts`.
#[derive(Clone)]
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.database().collection::<Post>("posts"),
        }
    }

    /// Recherche un post par identifiant.
    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(format!("Recherche du post: {}", e)))
    }

    /// Liste tous les posts.
    pub async fn find_all(&self) -> AppResult<Vec<Post>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(format!("Listing des posts: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Lecture du curseur: {}", e)))
    }

    /// Insère un nouveau post et retourne son identifiant.
    pub async fn insert(&self, post: &Post) -> AppResult<ObjectId> {
        let result = self
            .collection
            .insert_one(post)
            .await
            .map_err(|e| AppError::Database(format!("Insertion du post: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Identifiant inséré inattendu".to_string()))
    }

    /// Supprime un post ; retourne `false` s'il n'existait pas.
    pub async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(format!("Suppression du post: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}
