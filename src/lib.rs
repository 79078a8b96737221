//! # Backend de blog
//!
//! Service HTTP de blog minimal : inscription des utilisateurs,
//! authentification par token JWT et opérations CRUD sur les posts et les
//! utilisateurs, adossé à MongoDB.
//!
//! Deux émetteurs de tokens coexistent : ce service (payload natif
//! `userId`/`isAdmin`) et l'API d'administration externe (payload `data`
//! porteur d'un email), tous deux signés HS256 avec le même secret. Le
//! middleware d'authentification accepte les deux formes et les normalise
//! en un principal unique.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← endpoints REST + middleware d'authentification
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← extraction et validation des requêtes
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← logique métier (tokens, utilisateurs, posts)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← accès aux collections
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← stockage
//! └─────────────────┘
//! ```
//!
//! # Exemple
//!
//! ```rust,ignore
//! use blog_service_backend::config::JwtConfig;
//! use blog_service_backend::services::auth::TokenService;
//!
//! let token_service = TokenService::new(JwtConfig::from_env());
//! let principal = token_service.authenticate(Some("Bearer eyJ..."))?;
//! println!("admin: {}", principal.is_admin());
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
