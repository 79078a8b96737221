//! # Middlewares
//!
//! Pipeline de traitement des requêtes protégées. Un seul middleware est
//! fourni : l'authentification par token JWT, avec une variante réservée
//! aux administrateurs.
//!
//! ## Utilisation
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! // Authentification simple
//! web::scope("/api/posts")
//!     .wrap(AuthMiddleware::required(jwt_config.clone()))
//!
//! // Authentification + réservé aux administrateurs
//! web::scope("/api/users")
//!     .wrap(AuthMiddleware::admin_only(jwt_config.clone()))
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
