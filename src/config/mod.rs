//! # Configuration du service
//!
//! Regroupe les valeurs de configuration lues une seule fois au démarrage
//! depuis les variables d'environnement. Chaque valeur est construite
//! explicitement dans `main` puis injectée dans les composants qui en ont
//! besoin (middleware d'authentification, service de tokens, connexion
//! MongoDB) — aucun composant ne relit l'environnement à la volée, ce qui
//! permet de substituer la configuration dans les tests sans effet de bord
//! global.
//!
//! ## Variables d'environnement
//!
//! ```bash
//! # Secret partagé de signature JWT (obligatoire)
//! export JWT_SECRET="votre-secret-jwt"
//!
//! # Connexion MongoDB
//! export MONGO_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="blog"
//!
//! # Serveur HTTP
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! ```

use std::env;

/// Configuration des tokens JWT.
///
/// Porte le secret partagé utilisé pour signer et vérifier les tokens.
/// Le même secret est utilisé par ce service et par l'API d'administration
/// externe : les deux émetteurs signent avec la même clé HS256.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: String,
    /// Durée de vie des tokens émis par ce service, en heures.
    expiration_hours: i64,
}

impl JwtConfig {
    /// Construit une configuration JWT avec un secret explicite.
    ///
    /// Utilisé par les tests pour injecter un secret connu sans toucher
    /// à l'environnement du processus.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: 24,
        }
    }

    /// Charge la configuration JWT depuis l'environnement.
    ///
    /// # Panics
    ///
    /// Si la variable `JWT_SECRET` n'est pas définie. Le service ne peut
    /// pas vérifier de token sans secret, on échoue donc au démarrage.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
        }
    }

    /// Secret partagé de signature.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Durée de vie des tokens d'accès émis par ce service (heures).
    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }
}

/// Configuration de la connexion MongoDB.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    /// Charge la configuration MongoDB depuis l'environnement.
    ///
    /// Valeurs par défaut : `mongodb://localhost:27017` / base `blog`.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGO_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "blog".to_string()),
        }
    }
}

/// Configuration du serveur HTTP.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Charge l'adresse d'écoute depuis l'environnement.
    ///
    /// Valeurs par défaut : `127.0.0.1:8080`.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Adresse de bind au format `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_new_uses_default_expiration() {
        let config = JwtConfig::new("test-secret");
        assert_eq!(config.secret(), "test-secret");
        assert_eq!(config.expiration_hours(), 24);
    }

    #[test]
    fn test_server_config_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
