// src/noyau/constantes.rs
//
// Table des constantes nommées.
// - ordre fixe (substitution déterministe)
// - expansions calculées une seule fois, partagées en lecture seule

use std::f64::consts;
use std::sync::OnceLock;

/// Nombre d’or. `std::f64::consts::PHI` n’est pas encore stable.
pub const PHI: f64 = 1.618_033_988_749_895;

/// (identifiant minuscule, valeur), dans l’ordre de substitution.
pub const CONSTANTES: [(&str, f64); 5] = [
    ("ln10", consts::LN_10),
    ("ln2", consts::LN_2),
    ("phi", PHI),
    ("pi", consts::PI),
    ("e", consts::E),
];

static EXPANSIONS: OnceLock<Vec<(&'static str, String)>> = OnceLock::new();

/// Paires (identifiant, expansion décimale entre parenthèses).
///
/// L’affichage `{}` de f64 donne la plus courte écriture qui relit la même
/// valeur, donc `evaluate("pi") == PI` au bit près.
pub fn expansions() -> &'static [(&'static str, String)] {
    EXPANSIONS.get_or_init(|| {
        CONSTANTES
            .iter()
            .map(|&(nom, v)| (nom, format!("({v})")))
            .collect()
    })
}
