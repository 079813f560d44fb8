//! Noyau flottant
//!
//! Organisation interne :
//! - normalise.rs  : minuscules, blancs, ',' -> '.', constantes, ")(" -> ")*("
//! - constantes.rs : table (e, pi, phi, ln10, ln2) + expansions (une seule fois)
//! - jetons.rs     : tokenisation + opérateurs (précédence, application)
//! - piles.rs      : shunting-yard à deux piles, réduction au fil de l’eau
//! - format.rs     : affichage du résultat
//! - erreur.rs     : CalcError
//! - eval.rs       : pipeline complet

pub mod constantes;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod piles;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_avec_demarche, evaluate, Demarche};
pub use format::format_resultat;
pub use jetons::{
    apply_operation, format_tokens, is_digit, is_operation, precedence, tokenize, Jeton, Operateur,
};
pub use normalise::normalise;
