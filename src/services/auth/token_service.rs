//! # Service de tokens JWT
//!
//! Cœur de l'authentification : extraction du token porteur depuis
//! l'en-tête `Authorization`, vérification cryptographique et temporelle
//! (HS256, claim `exp`), puis normalisation du payload en principal
//! uniforme. Également émetteur des tokens natifs du service.
//!
//! La vérification est sans état : aucune mise en cache, chaque requête est
//! vérifiée indépendamment.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::auth::{AuthenticatedUser, NativeClaims, TokenPayload};
use crate::domain::entities::User;
use crate::errors::AppError;

/// Service de gestion des tokens JWT.
///
/// Construit avec la configuration injectée au démarrage ; le secret n'est
/// jamais relu de l'environnement, ce qui permet d'instancier le service
/// avec un secret de test.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Authentifie une requête à partir de son en-tête `Authorization`.
    ///
    /// Enchaîne les trois étapes du contrat : extraction du token porteur,
    /// vérification, normalisation en principal.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingToken` - en-tête absent ou sans segment de token
    /// * `AppError::InvalidToken` - token rejeté par la vérification
    pub fn authenticate(&self, auth_header: Option<&str>) -> Result<AuthenticatedUser, AppError> {
        let header = auth_header.ok_or(AppError::MissingToken)?;
        let token = self.extract_bearer_token(header)?;
        self.verify_token(token)
    }

    /// Extrait le segment de token d'un en-tête `Authorization`.
    ///
    /// Convention : `Bearer <token>`. L'en-tête est découpé sur les espaces
    /// et le deuxième segment est retenu ; s'il est absent ou vide, aucun
    /// credential exploitable n'a été présenté.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingToken` - pas de deuxième segment non vide
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .split(' ')
            .nth(1)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingToken)
    }

    /// Vérifie un token et normalise son payload en principal.
    ///
    /// La signature est vérifiée contre le secret partagé et le claim `exp`
    /// contre l'horloge. Tout échec de vérification — signature invalide,
    /// token malformé, expiré, mauvais algorithme — est rabattu uniformément
    /// sur `InvalidToken`, sans distinction de cause côté client.
    ///
    /// Le payload vérifié est ensuite classé ([`TokenPayload::classify`])
    /// et transformé en principal par une correspondance exhaustive.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - toute défaillance de vérification
    pub fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.secret().as_bytes());
        let validation = Validation::default();

        let token_data = decode::<serde_json::Value>(token, &decoding_key, &validation)
            .map_err(|e| {
                log::warn!("Erreur de vérification du token: {}", e);
                AppError::InvalidToken
            })?;

        let payload = TokenPayload::classify(token_data.claims);
        Ok(AuthenticatedUser::from_payload(payload))
    }

    /// Émet un token d'accès natif pour un utilisateur.
    ///
    /// Payload de forme native : `userId`, `isAdmin`, `iat`, `exp`
    /// (expiration configurée, 24 h par défaut), signé HS256 avec le
    /// secret partagé.
    ///
    /// # Errors
    ///
    /// * `AppError::Internal` - utilisateur sans identifiant ou échec de
    ///   signature
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.config.expiration_hours());

        let claims = NativeClaims {
            user_id: user
                .id_string()
                .ok_or_else(|| AppError::Internal("Utilisateur sans identifiant".to_string()))?,
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret().as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::Internal(format!("Échec de signature du token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new(SECRET))
    }

    fn sign(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        (Utc::now() + Duration::hours(1)).timestamp()
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let err = service().authenticate(None).unwrap_err();
        assert!(matches!(err, AppError::MissingToken));
    }

    #[test]
    fn test_malformed_header_is_rejected() {
        let err = service().authenticate(Some("InvalidFormat")).unwrap_err();
        assert!(matches!(err, AppError::MissingToken));
    }

    #[test]
    fn test_empty_bearer_value_is_rejected() {
        let err = service().authenticate(Some("Bearer ")).unwrap_err();
        assert!(matches!(err, AppError::MissingToken));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let err = service()
            .authenticate(Some("Bearer pas-un-jwt"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = sign(
            json!({ "userId": "user123", "isAdmin": false, "iat": Utc::now().timestamp(), "exp": future_exp() }),
            "autre-secret",
        );
        let err = service().verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let past = (Utc::now() - Duration::hours(1)).timestamp();
        let token = sign(
            json!({ "userId": "user123", "isAdmin": false, "iat": past - 3600, "exp": past }),
            SECRET,
        );
        let err = service().verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_native_token_payload_is_kept_verbatim() {
        let iat = Utc::now().timestamp();
        let exp = future_exp();
        let token = sign(
            json!({ "userId": "user123", "isAdmin": false, "iat": iat, "exp": exp }),
            SECRET,
        );

        let user = service().verify_token(&token).unwrap();
        assert_eq!(user.user_id(), Some("user123"));
        assert!(!user.is_admin());
        assert_eq!(user.claims()["exp"], exp);
        assert_eq!(user.claims()["iat"], iat);
    }

    #[test]
    fn test_external_token_is_normalized_to_admin() {
        let token = sign(
            json!({
                "data": [
                    { "email": "admin@example.com" },
                    { "email": "autre@example.com" }
                ],
                "iat": Utc::now().timestamp(),
                "exp": future_exp()
            }),
            SECRET,
        );

        let user = service().verify_token(&token).unwrap();
        assert_eq!(
            user.claims(),
            &json!({ "userId": "admin", "isAdmin": true, "email": "admin@example.com" })
        );
    }

    #[test]
    fn test_null_data_does_not_crash() {
        let iat = Utc::now().timestamp();
        let exp = future_exp();
        let token = sign(json!({ "data": null, "iat": iat, "exp": exp }), SECRET);

        let user = service().verify_token(&token).unwrap();
        assert_eq!(user.user_id(), None);
        assert!(!user.is_admin());
        assert_eq!(user.claims(), &json!({ "data": null, "iat": iat, "exp": exp }));
    }

    #[test]
    fn test_verification_is_idempotent() {
        let token = sign(
            json!({ "userId": "user123", "isAdmin": true, "iat": Utc::now().timestamp(), "exp": future_exp() }),
            SECRET,
        );

        let service = service();
        let first = service.verify_token(&token).unwrap();
        let second = service.verify_token(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_access_token_round_trips() {
        let service = service();
        let mut user = User::new("test@example.com".to_string(), "$2b$10$hash".to_string());
        user.id = Some(ObjectId::new());
        user.is_admin = true;

        let token = service.generate_access_token(&user).unwrap();
        let principal = service.verify_token(&token).unwrap();

        assert_eq!(principal.user_id(), user.id_string().as_deref());
        assert!(principal.is_admin());
        assert!(principal.claims()["exp"].is_number());
        assert!(principal.claims()["iat"].is_number());
    }

    #[test]
    fn test_generate_requires_persisted_user() {
        let user = User::new("test@example.com".to_string(), "$2b$10$hash".to_string());
        let err = service().generate_access_token(&user).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
