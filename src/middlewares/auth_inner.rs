//! Logique d'exécution du middleware d'authentification.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::errors::AppError;
use crate::services::auth::TokenService;

/// Service exécutant la décision d'authentification à chaque requête.
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Rc<TokenService>,
    pub admin_only: bool,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        let admin_only = self.admin_only;

        Box::pin(async move {
            // Valeur brute de l'en-tête Authorization ; un en-tête
            // non décodable en UTF-8 équivaut à un en-tête absent.
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            let user = match token_service.authenticate(auth_header) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("Authentification refusée: {}", err);
                    return Ok(reject(req, err));
                }
            };

            // Verrou administrateur : prédicat pur appliqué après
            // l'authentification sur les routes qui l'exigent.
            if admin_only && !user.is_admin() {
                log::warn!(
                    "Accès administrateur refusé: utilisateur {}",
                    user.user_id().unwrap_or("<inconnu>")
                );
                return Ok(reject(req, AppError::AdminOnly));
            }

            log::debug!(
                "Authentification réussie: utilisateur {}",
                user.user_id().unwrap_or("<inconnu>")
            );
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Court-circuite la requête avec la réponse associée à l'erreur.
///
/// Les handlers aval ne sont jamais invoqués sur ce chemin.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
