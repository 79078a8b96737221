//! # Connexion MongoDB
//!
//! Gestion de la connexion au document store. La connexion est établie une
//! seule fois au démarrage, vérifiée par un `ping`, puis partagée entre les
//! repositories (le client MongoDB gère lui-même son pool de connexions).

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// Enveloppe de la connexion MongoDB.
///
/// Fournit l'accès à la base configurée pour la couche repository.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// Établit la connexion MongoDB à partir de la configuration injectée.
    ///
    /// Parse l'URI, nomme l'application pour le monitoring côté serveur,
    /// puis valide la connexion avec une commande `ping`.
    ///
    /// # Errors
    ///
    /// * `AppError::Database` - URI invalide ou serveur injoignable
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::Database(format!("URI MongoDB invalide: {}", e)))?;

        client_options.app_name = Some("blog_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::Database(format!("Client MongoDB: {}", e)))?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("Ping MongoDB échoué: {}", e)))?;

        info!("✅ Connecté à MongoDB: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// Base MongoDB configurée, point d'entrée des repositories.
    pub fn database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// Nom de la base utilisée.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
