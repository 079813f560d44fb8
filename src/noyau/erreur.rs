//! Noyau — erreurs
//!
//! [`CalcError`] est l’ensemble fermé des échecs possibles d’une évaluation.
//! Chaque erreur est détectée là où elle survient et remonte telle quelle à
//! l’appelant (pas de reprise, pas de résultat partiel).
//!
//! Les messages restent ceux affichés par les frontaux (console, UI).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Chaîne vide (ou seulement des blancs) avant normalisation.
    #[error("operation not entered")]
    EmptyInput,

    /// Caractère ni chiffre, ni opérateur, ni parenthèse après normalisation.
    #[error("operation cannot be parsed to numeric values (unexpected {0:?})")]
    UnparseableToken(char),

    /// Réduction tentée avec moins de deux valeurs en attente,
    /// ou pile finale qui ne contient pas exactement une valeur.
    #[error("invalid expression")]
    InvalidExpression,

    /// Opérande droit de `/` exactement nul.
    #[error("division by zero")]
    DivisionByZero,
}
