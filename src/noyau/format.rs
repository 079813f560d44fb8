// src/noyau/format.rs

/// Décimales max pour un affichage fixe (au-delà, f64 n’a plus rien à dire).
pub const DIGITS_MAX: usize = 17;

/// Affichage d’un résultat.
/// - `None`    : plus courte écriture qui relit la même valeur (ex: 6, 11.1, 0.1)
/// - `Some(n)` : n décimales au plus, zéros finaux retirés (ex: 3.14159 pour n = 5)
pub fn format_resultat(v: f64, digits: Option<usize>) -> String {
    let s = match digits {
        None => format!("{v}"),
        Some(n) => {
            let n = n.min(DIGITS_MAX);
            let brut = format!("{v:.n$}");
            if brut.contains('.') {
                brut.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                brut
            }
        }
    };

    // "-0" n’apporte rien à l’utilisateur
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
