//! # Middleware d'authentification JWT
//!
//! Garde les routes protégées : chaque requête doit présenter un token
//! valide, non expiré et correctement signé dans l'en-tête `Authorization`.
//! En cas de succès, le principal normalisé est attaché aux extensions de
//! la requête et la chaîne continue ; en cas d'échec, le middleware écrit
//! lui-même la réponse (401 ou 403) et les handlers aval ne sont jamais
//! invoqués.
//!
//! Machine à états par requête :
//!
//! ```text
//! Unauthenticated ──► MissingCredential (401) ─ terminal
//!        │      └───► InvalidCredential (403) ─ terminal
//!        ▼
//!  Authenticated ───► Forbidden (403, routes admin) ─ terminal
//!        │
//!        ▼
//!    Authorized (handler exécuté)
//! ```

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::config::JwtConfig;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// Middleware d'authentification par token.
///
/// La configuration JWT est injectée à la construction : le secret de
/// vérification est figé au câblage des routes, pas relu à chaque requête.
pub struct AuthMiddleware {
    token_service: TokenService,
    admin_only: bool,
}

impl AuthMiddleware {
    /// Authentification requise, sans restriction de rôle.
    pub fn required(config: JwtConfig) -> Self {
        Self {
            token_service: TokenService::new(config),
            admin_only: false,
        }
    }

    /// Authentification requise et accès réservé aux administrateurs.
    ///
    /// Le verrou administrateur est un prédicat pur appliqué après
    /// l'authentification : un principal dont `isAdmin` n'est pas
    /// strictement `true` est rejeté en 403.
    pub fn admin_only(config: JwtConfig) -> Self {
        Self {
            token_service: TokenService::new(config),
            admin_only: true,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: Rc::new(self.token_service.clone()),
            admin_only: self.admin_only,
        }))
    }
}
