//! # Couche de services
//!
//! Logique métier de l'application, entre les handlers HTTP et les
//! repositories. Chaque service possède son repository et retourne des
//! `AppResult` que les handlers convertissent en réponses.

pub mod auth;
pub mod posts;
pub mod users;
