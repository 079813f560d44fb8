// src/noyau/piles.rs
//
// Shunting-yard à deux piles, évalué au fil de l’eau (pas de RPN intermédiaire).
//
// Règles:
// - réduction = dépile b, a, op puis empile a op b
// - toute réduction exige au moins deux valeurs, sinon InvalidExpression
// - associativité à GAUCHE pour tous les opérateurs, '^' compris : 2^3^2 = 64
// - moins unaire : '-' en tête, après un opérateur ou après '(' => négation
//   de la prochaine valeur produite (nombre ou groupe)
// - multiplication implicite : nombre/')' suivi de '(' ; ')' suivi d’un nombre
// - ')' sans '(' correspondante : toléré
// - '(' jamais fermée : fermée implicitement en fin d’entrée

use tracing::trace;

use super::erreur::CalcError;
use super::jetons::{Jeton, Operateur};

#[derive(Clone, Copy, Debug)]
enum EnAttente {
    Op(Operateur),
    /// `base` : hauteur de la pile de valeurs à l’ouverture.
    Ouvrante { negation: bool, base: usize },
}

#[derive(Debug, Default)]
struct Piles {
    valeurs: Vec<f64>,
    operations: Vec<EnAttente>,
    /// Démarche : une ligne par réduction (seulement si demandée).
    etapes: Option<Vec<String>>,
}

impl Piles {
    fn resoudre_une(&mut self) -> Result<(), CalcError> {
        if self.valeurs.len() < 2 {
            return Err(CalcError::InvalidExpression);
        }
        let op = match self.operations.pop() {
            Some(EnAttente::Op(op)) => op,
            _ => return Err(CalcError::InvalidExpression),
        };
        let b = self.valeurs.pop().ok_or(CalcError::InvalidExpression)?;
        let a = self.valeurs.pop().ok_or(CalcError::InvalidExpression)?;

        let r = op.applique(a, b)?;
        trace!(a = a, b = b, op = %op.symbole(), r = r, "réduction");
        if let Some(etapes) = self.etapes.as_mut() {
            etapes.push(format!("{a} {} {b} = {r}", op.symbole()));
        }

        self.valeurs.push(r);
        Ok(())
    }

    /// Réduit tant que le sommet est un opérateur de précédence >= `op`, puis empile `op`.
    fn empile_operateur(&mut self, op: Operateur) -> Result<(), CalcError> {
        while let Some(EnAttente::Op(sommet)) = self.operations.last() {
            if sommet.precedence() < op.precedence() {
                break;
            }
            self.resoudre_une()?;
        }
        self.operations.push(EnAttente::Op(op));
        Ok(())
    }

    fn ouvre_groupe(&mut self, negation: bool) {
        self.operations.push(EnAttente::Ouvrante {
            negation,
            base: self.valeurs.len(),
        });
    }

    /// Retire une ouverture : le groupe doit avoir produit une valeur.
    fn ferme_ouvrante(&mut self, negation: bool, base: usize) -> Result<(), CalcError> {
        if self.valeurs.len() <= base {
            return Err(CalcError::InvalidExpression);
        }
        if negation {
            if let Some(v) = self.valeurs.last_mut() {
                *v = -*v;
            }
        }
        Ok(())
    }

    fn ferme_groupe(&mut self) -> Result<(), CalcError> {
        loop {
            match self.operations.last().copied() {
                Some(EnAttente::Op(_)) => self.resoudre_une()?,
                Some(EnAttente::Ouvrante { negation, base }) => {
                    self.operations.pop();
                    return self.ferme_ouvrante(negation, base);
                }
                // ')' orpheline : tolérée
                None => return Ok(()),
            }
        }
    }

    fn vide(&mut self) -> Result<f64, CalcError> {
        while let Some(sommet) = self.operations.last().copied() {
            match sommet {
                EnAttente::Op(_) => self.resoudre_une()?,
                EnAttente::Ouvrante { negation, base } => {
                    self.operations.pop();
                    self.ferme_ouvrante(negation, base)?;
                }
            }
        }

        match self.valeurs.as_slice() {
            [v] => Ok(*v),
            _ => Err(CalcError::InvalidExpression),
        }
    }
}

fn produit_une_valeur(precedent: Option<Jeton>) -> bool {
    matches!(precedent, Some(Jeton::Nombre(_)) | Some(Jeton::Fermante))
}

fn attend_une_valeur(precedent: Option<Jeton>) -> bool {
    matches!(precedent, None | Some(Jeton::Op(_)) | Some(Jeton::Ouvrante))
}

/// Réduit une suite de jetons à une valeur.
/// Si `etapes` est fourni, y ajoute une ligne par réduction effectuée.
pub fn reduit(jetons: &[Jeton], etapes: Option<&mut Vec<String>>) -> Result<f64, CalcError> {
    let mut piles = Piles {
        etapes: etapes.as_ref().map(|_| Vec::new()),
        ..Piles::default()
    };

    let mut negation = false;
    let mut precedent: Option<Jeton> = None;

    for &jeton in jetons {
        match jeton {
            Jeton::Nombre(v) => {
                if matches!(precedent, Some(Jeton::Fermante)) {
                    piles.empile_operateur(Operateur::Fois)?;
                }
                let v = if negation { -v } else { v };
                negation = false;
                piles.valeurs.push(v);
            }

            Jeton::Ouvrante => {
                if produit_une_valeur(precedent) {
                    piles.empile_operateur(Operateur::Fois)?;
                }
                piles.ouvre_groupe(negation);
                negation = false;
            }

            Jeton::Fermante => {
                // "-)" : le moins unaire n’a rien à nier
                if negation {
                    return Err(CalcError::InvalidExpression);
                }
                piles.ferme_groupe()?;
            }

            Jeton::Op(Operateur::Moins) if attend_une_valeur(precedent) => {
                negation = !negation;
            }

            Jeton::Op(op) => piles.empile_operateur(op)?,
        }

        precedent = Some(jeton);
    }

    if negation {
        return Err(CalcError::InvalidExpression);
    }

    let resultat = piles.vide();

    if let (Some(sortie), Some(faites)) = (etapes, piles.etapes.take()) {
        sortie.extend(faites);
    }

    resultat
}
