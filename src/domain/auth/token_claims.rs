//! # Classification des payloads de token
//!
//! Deux systèmes émettent des tokens acceptés par ce service, avec deux
//! formes de payload distinctes :
//!
//! - **Forme native** : émise par ce service, porte directement `userId`
//!   et `isAdmin` en plus des claims standard `exp`/`iat`.
//! - **Forme externe** : émise par l'API d'administration Python, porte un
//!   champ `data` contenant une séquence d'enregistrements dont le premier
//!   porte un `email`.
//!
//! La distinction est matérialisée ici en somme de types explicite plutôt
//! qu'en test de forme au fil de l'eau : la branche qui accorde le statut
//! administrateur aux tokens externes est ainsi auditable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claims signés par l'émetteur natif.
///
/// C'est la forme que ce service produit lorsqu'il émet un token d'accès.
/// À la vérification en revanche, le payload natif est conservé tel quel
/// (voir [`TokenPayload::Native`]) : aucun champ n'est renommé ni filtré.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeClaims {
    /// Identifiant de l'utilisateur (ObjectId sous forme de chaîne).
    pub user_id: String,
    /// Statut administrateur.
    pub is_admin: bool,
    /// Date d'émission (timestamp Unix).
    pub iat: i64,
    /// Date d'expiration (timestamp Unix).
    pub exp: i64,
}

/// Payload décodé d'un token vérifié, classé par émetteur.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenPayload {
    /// Token de l'API d'administration externe : `data[0].email` présent.
    ///
    /// Tout porteur d'un tel token, dès lors que la signature est valide,
    /// est traité comme administrateur. Cette confiance inconditionnelle
    /// reproduit le contrat établi avec l'API Python ; elle est volontaire
    /// et concentrée dans cette unique branche.
    External {
        /// Email du premier enregistrement de `data`.
        email: String,
    },
    /// Toute autre forme : le payload est conservé verbatim.
    ///
    /// Couvre les tokens natifs mais aussi les payloads dégénérés (`data`
    /// null, vide, ou sans email) — le code aval doit les tolérer.
    Native(Value),
}

impl TokenPayload {
    /// Classe un payload décodé selon son émetteur.
    ///
    /// Le seul signal de la forme externe est un champ `data` contenant une
    /// séquence non vide dont le premier élément porte un `email` non vide.
    /// Tout le reste — `data` absent, null, vide, premier élément sans
    /// email, email vide ou non textuel — retombe sur la branche native.
    pub fn classify(claims: Value) -> Self {
        let external_email = claims
            .get("data")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(|first| first.get("email"))
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty());

        match external_email {
            Some(email) => TokenPayload::External {
                email: email.to_string(),
            },
            None => TokenPayload::Native(claims),
        }
    }
}
