//! # Couche d'accès aux données
//!
//! Repositories MongoDB, une collection par module. Les erreurs du driver
//! sont converties en `AppError::Database` et ne remontent jamais telles
//! quelles au client.

pub mod posts;
pub mod users;

pub use posts::PostRepository;
pub use users::UserRepository;
