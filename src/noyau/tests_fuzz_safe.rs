//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe) pour les arbres entièrement parenthésés
//! - proptest pour les suites sans parenthèses (précédence) et la normalisation
//! - budget temps global
//! - seule erreur attendue sur entrée bien formée : division par zéro

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::{evaluate, normalise, CalcError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbres parenthésés + référence ------------------------ */

/// Renvoie (texte, valeur attendue). `Err` si une division par zéro survient.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Result<f64, CalcError>) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(20);
        return (n.to_string(), Ok(f64::from(n)));
    }

    let (ta, va) = gen_expr(rng, depth - 1);
    let (tb, vb) = gen_expr(rng, depth - 1);
    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];

    let v = match (va, vb) {
        (Ok(a), Ok(b)) => match op {
            '+' => Ok(a + b),
            '-' => Ok(a - b),
            '*' => Ok(a * b),
            _ if b == 0.0 => Err(CalcError::DivisionByZero),
            _ => Ok(a / b),
        },
        (Err(e), _) | (_, Err(e)) => Err(e),
    };

    (format!("({ta} {op} {tb})"), v)
}

#[test]
fn fuzz_arbres_parentheses() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5eed_1234);

    for _ in 0..2_000 {
        budget(start, max);
        let (texte, attendu) = gen_expr(&mut rng, 5);
        let obtenu = evaluate(&texte);
        match (&obtenu, &attendu) {
            (Ok(a), Ok(b)) if a.is_nan() && b.is_nan() => {}
            _ => assert_eq!(obtenu, attendu, "expr={texte:?}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);
    for _ in 0..200 {
        let (t1, _) = gen_expr(&mut r1, 4);
        let (t2, _) = gen_expr(&mut r2, 4);
        assert_eq!(t1, t2);
        assert_eq!(evaluate(&t1), evaluate(&t2));
    }
}

/* ------------------------ Stress (itératif, pas de récursion) ------------------------ */

#[test]
fn stress_imbrication_profonde() {
    let start = Instant::now();
    let n = 10_000;
    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&s), Ok(1.0));

    let s = format!("{}2", "-".repeat(n + 1));
    assert_eq!(evaluate(&s), Ok(-2.0));

    budget(start, Duration::from_secs(5));
}

#[test]
fn stress_longue_somme() {
    let start = Instant::now();
    let s = vec!["1"; 20_000].join("+");
    assert_eq!(evaluate(&s), Ok(20_000.0));
    budget(start, Duration::from_secs(5));
}

/* ------------------------ Propriétés (proptest) ------------------------ */

/// Référence : termes multiplicatifs de gauche à droite, puis somme de gauche à droite.
fn reference(premier: u32, suite: &[(usize, u32)]) -> (String, f64) {
    fn cumule(acc: Option<f64>, signe: char, terme: f64) -> f64 {
        match acc {
            None => terme,
            Some(s) if signe == '+' => s + terme,
            Some(s) => s - terme,
        }
    }

    let mut texte = premier.to_string();
    let mut acc: Option<f64> = None;
    let mut signe = '+';
    let mut terme = f64::from(premier);

    for &(k, n) in suite {
        let op = ['+', '-', '*', '/'][k];
        texte.push(' ');
        texte.push(op);
        texte.push(' ');
        texte.push_str(&n.to_string());

        let n = f64::from(n);
        match op {
            '*' => terme *= n,
            '/' => terme /= n,
            _ => {
                acc = Some(cumule(acc, signe, terme));
                signe = op;
                terme = n;
            }
        }
    }

    (texte, cumule(acc, signe, terme))
}

proptest! {
    #[test]
    fn prop_precedence_gauche_droite(
        premier in 0u32..100,
        suite in prop::collection::vec((0usize..4, 1u32..100), 0..8),
    ) {
        let (texte, attendu) = reference(premier, &suite);
        prop_assert_eq!(evaluate(&texte), Ok(attendu), "expr={}", texte);
    }

    #[test]
    fn prop_normalisation_idempotente(s in "[ -~]{0,40}") {
        let une = normalise(&s);
        prop_assert_eq!(normalise(&une), une);
    }

    #[test]
    fn prop_jamais_de_panique(s in "[0-9+*/^(). ,a-z-]{0,30}") {
        let _ = evaluate(&s);
    }
}
