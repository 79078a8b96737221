//! # Modèle de domaine
//!
//! Types métier de l'application, organisés en trois sous-modules :
//!
//! - [`auth`] : classification des payloads de token et principal authentifié
//! - [`entities`] : documents persistés (utilisateurs, posts)
//! - [`dto`] : objets de transfert des requêtes et réponses HTTP

pub mod auth;
pub mod dto;
pub mod entities;
