// src/console.rs
//
// Console ligne à ligne (frontal mince, hors noyau).
// - une ligne = une expression
// - affiche le résultat ou le message d’erreur, puis continue
// - s’arrête sur un mot sentinelle ("exit" / "end") ou en fin d’entrée
//
// Note : "e" n’est PAS un mot de sortie ici, c’est la constante d’Euler.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::noyau::{evaluate, format_resultat};

/// Mots qui terminent la boucle (insensibles à la casse).
pub const SENTINELLES: [&str; 2] = ["exit", "end"];

#[derive(Clone, Debug, Default)]
pub struct OptionsConsole {
    /// Décimales fixes ; `None` = écriture la plus courte.
    pub digits: Option<usize>,
    /// Bannière d’accueil (désactivée pour un flux non interactif).
    pub banniere: bool,
}

fn est_sentinelle(ligne: &str) -> bool {
    SENTINELLES
        .iter()
        .any(|s| ligne.eq_ignore_ascii_case(s))
}

/// Boucle principale. Renvoie le nombre d’expressions évaluées avec succès.
pub fn boucle<R: BufRead, W: Write>(
    entree: R,
    mut sortie: W,
    options: &OptionsConsole,
) -> io::Result<usize> {
    if options.banniere {
        writeln!(sortie, "Calculatrice!")?;
        writeln!(sortie, "-- Entrez une opération puis Entrée.")?;
        writeln!(sortie, "-- Pour quitter : 'exit' ou 'end'.")?;
    }

    let mut reussies = 0;
    for ligne in entree.lines() {
        let ligne = ligne?;
        let ligne = ligne.trim();

        if ligne.is_empty() {
            continue;
        }
        if est_sentinelle(ligne) {
            info!("fin demandée");
            if options.banniere {
                writeln!(sortie, "À bientôt !")?;
            }
            break;
        }

        match evaluate(ligne) {
            Ok(v) => {
                writeln!(sortie, "{}", format_resultat(v, options.digits))?;
                reussies += 1;
            }
            Err(e) => {
                debug!(expression = ligne, erreur = %e, "échec");
                writeln!(sortie, "{e}")?;
            }
        }
        sortie.flush()?;
    }

    Ok(reussies)
}
