//! # Domaine d'authentification
//!
//! Types au cœur du contrôle d'accès : la classification des deux formes
//! de payload JWT acceptées ([`token_claims`]) et le principal normalisé
//! attaché aux requêtes authentifiées ([`authenticated_user`]).

pub mod authenticated_user;
pub mod token_claims;

pub use authenticated_user::AuthenticatedUser;
pub use token_claims::{NativeClaims, TokenPayload};
