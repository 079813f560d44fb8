// src/noyau/jetons.rs

use super::erreur::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Puiss, // ^
}

impl Operateur {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            '^' => Some(Self::Puiss),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
            Self::Puiss => '^',
        }
    }

    /// "+, -": 1 ; "*, /": 2 ; "^": 3
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Div => 2,
            Self::Puiss => 3,
        }
    }

    /// a op b
    pub fn applique(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Plus => Ok(a + b),
            Self::Moins => Ok(a - b),
            Self::Fois => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Self::Puiss => Ok(a.powf(b)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    Ouvrante,
    Fermante,
}

/// Précédence d’un caractère ; 0 si ce n’est pas un opérateur.
pub fn precedence(c: char) -> u8 {
    Operateur::from_char(c).map_or(0, Operateur::precedence)
}

/// Applique l’opérateur `symbole` à (a, b).
/// Un symbole inconnu n’est pas une opération : `InvalidExpression`.
pub fn apply_operation(a: f64, b: f64, symbole: char) -> Result<f64, CalcError> {
    Operateur::from_char(symbole)
        .ok_or(CalcError::InvalidExpression)?
        .applique(a, b)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_operation(c: char) -> bool {
    Operateur::from_char(c).is_some()
}

/// Tokenize une chaîne DÉJÀ normalisée (voir `normalise`).
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 3.) : une seule virgule décimale par littéral
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Tout autre caractère (y compris un '.' orphelin) est refusé immédiatement.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, CalcError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if !is_digit(c) && !is_operation(c) && c != '(' && c != ')' {
            return Err(CalcError::UnparseableToken(c));
        }

        if c == '(' {
            out.push(Jeton::Ouvrante);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::Fermante);
            i += 1;
            continue;
        }

        if let Some(op) = Operateur::from_char(c) {
            out.push(Jeton::Op(op));
            i += 1;
            continue;
        }

        // Nombre : chiffres, au plus un '.', chiffres
        let start = i;
        let mut point = false;
        while i < chars.len() && (is_digit(chars[i]) || (chars[i] == '.' && !point)) {
            point |= chars[i] == '.';
            i += 1;
        }
        let litteral: String = chars[start..i].iter().collect();
        // Lecture décimale correctement arrondie (identique à l’accumulation
        // base 10, sans erreur cumulée sur les décimales).
        let v: f64 = litteral
            .parse()
            .map_err(|_| CalcError::UnparseableToken('.'))?;
        out.push(Jeton::Nombre(v));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::Ouvrante => "(".to_string(),
            Jeton::Fermante => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
