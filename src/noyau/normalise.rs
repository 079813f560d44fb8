// src/noyau/normalise.rs
//
// Normalisation textuelle avant tokenisation.
//
// Étapes (dans cet ordre):
// 1) minuscules
// 2) retrait des blancs
// 3) ',' -> '.' (séparateur décimal “à la française”)
// 4) constantes nommées -> "(expansion)"
// 5) ")(" -> ")*(" (multiplication implicite)
//
// L’étape 5 vient après les constantes : "pie" donne "(3.14…)*(2.71…)".
// Aucune erreur ici ; un reste inattendu échoue plus tard (jeton illisible).

use super::constantes::expansions;

pub fn normalise(expression: &str) -> String {
    let mut s: String = expression
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    for (nom, exp) in expansions() {
        if s.contains(nom) {
            s = s.replace(nom, exp);
        }
    }

    s.replace(")(", ")*(")
}
