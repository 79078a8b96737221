//! # Entités persistées
//!
//! Documents MongoDB du service : utilisateurs et posts. Les noms de champs
//! sérialisés restent en camelCase pour préserver la compatibilité avec les
//! collections existantes.

pub mod post;
pub mod user;

pub use post::Post;
pub use user::User;
