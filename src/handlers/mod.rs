//! # Handlers HTTP
//!
//! Couche web de l'application : extraction des paramètres, validation des
//! corps de requête, délégation aux services. Les handlers retournent
//! `Result<HttpResponse, AppError>` ; la conversion des erreurs en réponses
//! JSON est centralisée dans `ResponseError`.

pub mod auth;
pub mod posts;
pub mod users;
