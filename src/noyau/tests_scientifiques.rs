//! Tests scientifiques (campagne) : valeurs de référence + invariants.
//!
//! - constantes au bit près (expansion la plus courte relue sans perte)
//! - associativité à gauche, '^' compris
//! - multiplication implicite et moins unaire combinés
//! - pile finale : exactement une valeur, sinon InvalidExpression

use std::f64::consts;

use super::constantes::PHI;
use super::{evaluate, CalcError};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes_au_bit_pres() {
    assert_eq!(eval_ok("e"), consts::E);
    assert_eq!(eval_ok("pi"), consts::PI);
    assert_eq!(eval_ok("phi"), PHI);
    assert_eq!(eval_ok("ln10"), consts::LN_10);
    assert_eq!(eval_ok("ln2"), consts::LN_2);
}

#[test]
fn sci_constantes_casse_et_blancs() {
    assert_eq!(eval_ok("  PI "), consts::PI);
    assert_eq!(eval_ok("Ln 2"), consts::LN_2);
}

#[test]
fn sci_combinaison_de_reference() {
    assert_eq!(eval_ok("pi/2 + (3)(4) - e"), 10.852514498335852);
}

#[test]
fn sci_constantes_adjacentes() {
    assert_eq!(eval_ok("2pi"), 2.0 * consts::PI);
    assert_eq!(eval_ok("pie"), consts::PI * consts::E);
    assert_eq!(eval_ok("-pi"), -consts::PI);
    assert_eq!(eval_ok("e^ln2"), consts::E.powf(consts::LN_2));
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn sci_decimaux() {
    assert_proche("11 + 0.1", 11.1);
    assert_proche("11 + 0,1", 11.1);
    assert_eq!(eval_ok("0.1 + 0.2"), 0.1 + 0.2);
    assert_eq!(eval_ok("123.456"), 123.456);
    assert_eq!(eval_ok("0.000001"), 0.000001);
}

/* ------------------------ Associativité / précédence ------------------------ */

#[test]
fn sci_puissance_associative_a_gauche() {
    assert_eq!(eval_ok("2^3^2"), 64.0);
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

#[test]
fn sci_puissances_ieee() {
    assert_proche("4^0.5", 2.0);
    assert_eq!(eval_ok("2^-2"), 0.25);
    assert!(eval_ok("(-8)^(1/3)").is_nan());
    assert_eq!(eval_ok("0^0"), 1.0);
}

#[test]
fn sci_gauche_droite_meme_precedence() {
    assert_eq!(eval_ok("100 / 10 / 5"), 2.0);
    assert_eq!(eval_ok("10 - 4 - 3"), 3.0);
    assert_eq!(eval_ok("2 * 3 / 4"), 1.5);
    assert_eq!(eval_ok("1 - 2 + 3"), 2.0);
}

/* ------------------------ Implicite + unaire ------------------------ */

#[test]
fn sci_implicite() {
    assert_eq!(eval_ok("(3)(4)"), 12.0);
    assert_eq!(eval_ok("(5)(5)2"), 50.0);
    assert_eq!(eval_ok("3(4)"), 12.0);
    assert_eq!(eval_ok("(1+1)(2+2)(3)"), 24.0);
    assert_eq!(eval_ok("1 + 2(3)"), 7.0);
}

#[test]
fn sci_unaire() {
    assert_eq!(eval_ok("-(2)(3)"), -6.0);
    assert_eq!(eval_ok("-2 - -2"), 0.0);
    assert_eq!(eval_ok("(-1)(-1)"), 1.0);
}

/* ------------------------ Parenthèses tolérées ------------------------ */

#[test]
fn sci_fermante_orpheline_toleree() {
    assert_eq!(eval_ok("(1 + 2))"), 3.0);
    assert_eq!(eval_ok("4)"), 4.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert_eq!(evaluate(""), Err(CalcError::EmptyInput));
    assert_eq!(evaluate("2 / 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("2 / (e - e)"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("1 +"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate("()"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate("-"), Err(CalcError::InvalidExpression));
    assert_eq!(evaluate("1 ? 2"), Err(CalcError::UnparseableToken('?')));
    assert_eq!(evaluate("1..2"), Err(CalcError::UnparseableToken('.')));
}
