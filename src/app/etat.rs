//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, affichage, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Décimales d’affichage bornées.

use calculatrice_flottante::noyau::format::DIGITS_MAX;
use calculatrice_flottante::Demarche;

/// Décimales fixes par défaut (quand l’affichage fixe est activé).
const DIGITS_DEFAUT: usize = 10;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Option<f64>, // dernière valeur calculée
    pub erreur: String,        // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres d’affichage ---
    pub digits_fixes: bool, // false : écriture la plus courte
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            digits_fixes: false,
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + affichage par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits_fixes = false;
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE le dernier résultat (pas d’écran vidé sur une faute),
    /// mais la démarche n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = Some(valeur);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }

    /// Décimales effectivement utilisées pour l’affichage.
    pub fn digits_affichage(&self) -> Option<usize> {
        self.digits_fixes.then_some(self.digits)
    }
}
