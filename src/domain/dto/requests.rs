//! Requêtes entrantes.

use serde::Deserialize;
use validator::Validate;

/// Corps de `POST /api/auth/register`.
///
/// Les deux champs sont requis ; l'absence de l'un ou l'autre produit la
/// réponse 400 « Email et mot de passe requis. » (voir le handler).
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email et mot de passe requis."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email et mot de passe requis."))]
    pub password: String,
}

/// Corps de `POST /api/posts`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Titre et contenu requis."))]
    pub title: String,
    #[validate(length(min = 1, message = "Titre et contenu requis."))]
    pub content: String,
}
