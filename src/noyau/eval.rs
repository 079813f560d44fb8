//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> deux piles (shunting-yard) -> f64
//!
//! Fonction pure : piles créées à chaque appel, aucun état partagé
//! hormis la table des constantes (lecture seule).

use tracing::debug;

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalise;
use super::piles::reduit;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub etapes: Vec<String>,
}

/// API publique : évalue une expression arithmétique.
///
/// ```
/// use calculatrice_flottante::{evaluate, CalcError};
///
/// assert_eq!(evaluate("10 / 2 + 1"), Ok(6.0));
/// assert_eq!(evaluate("(5)(5)2"), Ok(50.0));
/// assert_eq!(evaluate("2 / 0"), Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    if expression.trim().is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let s = normalise(expression);
    debug!(entree = expression, normalisee = %s, "évaluation");

    let jetons = tokenize(&s)?;
    let v = reduit(&jetons, None)?;

    debug!(resultat = v, "évaluation terminée");
    Ok(v)
}

/// Comme [`evaluate`], avec la démarche (texte normalisé, jetons, réductions).
pub fn eval_avec_demarche(expression: &str) -> Result<(f64, Demarche), CalcError> {
    if expression.trim().is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let normalisee = normalise(expression);
    let jetons = tokenize(&normalisee)?;

    let mut etapes = Vec::new();
    let v = reduit(&jetons, Some(&mut etapes))?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        normalisee,
        etapes,
    };
    Ok((v, d))
}
