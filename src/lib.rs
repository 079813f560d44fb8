//! Calculatrice flottante
//!
//! Évalue une expression arithmétique texte en `f64` :
//! `+ - * / ^`, parenthèses, multiplication implicite (`(3)(4)`, `2(1+1)`),
//! moins unaire, `.` ou `,` comme séparateur décimal, constantes
//! `e`, `pi`, `phi`, `ln10`, `ln2`.
//!
//! ```
//! use calculatrice_flottante::evaluate;
//!
//! assert_eq!(evaluate("(10 / 2) + (3 / 3)"), Ok(6.0));
//! assert_eq!(evaluate("2^3^2"), Ok(64.0)); // associatif à gauche
//! ```
//!
//! - [`noyau`]   : pipeline pur (normalise -> jetons -> deux piles)
//! - [`console`] : boucle ligne à ligne autour de [`evaluate`]

pub mod console;
pub mod noyau;

pub use noyau::{eval_avec_demarche, evaluate, format_resultat, CalcError, Demarche};
