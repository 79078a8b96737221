//! # Principal authentifié
//!
//! Représentation uniforme de l'identité attachée à une requête une fois le
//! token vérifié. Construite à chaque requête par le middleware
//! d'authentification, lue par les handlers, jamais persistée.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::auth::token_claims::TokenPayload;
use crate::errors::AppError;

/// Principal attaché à une requête authentifiée.
///
/// Enveloppe les claims décodés du token. Un token natif produit un
/// principal égal au payload verbatim (y compris `exp`/`iat` et tout champ
/// embarqué par l'émetteur) ; un token externe est normalisé en principal
/// administrateur fixe. Le payload pouvant être dégénéré (sans `userId` ni
/// `isAdmin`), tous les accesseurs sont tolérants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthenticatedUser(Value);

impl AuthenticatedUser {
    /// Normalise un payload classé en principal.
    ///
    /// Quelle que soit la forme du token, exactement un principal est
    /// produit :
    ///
    /// - `External` → `{ "userId": "admin", "isAdmin": true, "email": ... }`
    /// - `Native` → le payload décodé, sans renommage ni filtrage
    pub fn from_payload(payload: TokenPayload) -> Self {
        match payload {
            TokenPayload::External { email } => Self(json!({
                "userId": "admin",
                "isAdmin": true,
                "email": email,
            })),
            TokenPayload::Native(claims) => Self(claims),
        }
    }

    /// Identifiant de l'utilisateur, si le payload en porte un.
    pub fn user_id(&self) -> Option<&str> {
        self.0.get("userId").and_then(Value::as_str)
    }

    /// Statut administrateur.
    ///
    /// Seul un `isAdmin` strictement égal au booléen `true` accorde le
    /// statut ; absent, null ou de tout autre type, le principal n'est pas
    /// administrateur.
    pub fn is_admin(&self) -> bool {
        self.0.get("isAdmin").and_then(Value::as_bool) == Some(true)
    }

    /// Email du principal, si présent.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Claims bruts du principal.
    pub fn claims(&self) -> &Value {
        &self.0
    }
}

/// Extraction du principal depuis les extensions de la requête.
///
/// Disponible uniquement sur les routes protégées par le middleware
/// d'authentification, qui insère le principal avant le handler.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| Error::from(AppError::MissingToken)),
        )
    }
}
