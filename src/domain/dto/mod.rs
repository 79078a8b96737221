//! # Objets de transfert HTTP
//!
//! Requêtes entrantes (avec validation) et projections de réponse. Les
//! réponses ne portent jamais le hachage de mot de passe.

pub mod requests;
pub mod responses;

pub use requests::{CreatePostRequest, RegisterRequest};
pub use responses::{MessageResponse, PostResponse, UserDetail, UserSummary};
