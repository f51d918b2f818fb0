//! Scénarios de bout en bout : comportements attendus de `compute`.
//!
//! Les cas suivent ce que l’utilisateur tape au pavé : priorités, associativité,
//! multiplication implicite, refus de syntaxe, décimaux, parenthèses imbriquées.

use pretty_assertions::assert_eq;

use super::erreur::ErrorKind;
use super::rpn::ModeArithmetique;
use super::{compute, format_resultat};
use crate::config::ConfigCalc;

fn eval_ok(expr: &str) -> f64 {
    compute(expr, &ConfigCalc::default()).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_refus(expr: &str, attendu: ErrorKind) {
    match compute(expr, &ConfigCalc::default()) {
        Ok(v) => panic!("expr={expr:?} accepté, valeur={v}"),
        Err(e) => assert_eq!(e.kind(), attendu, "expr={expr:?} err={e}"),
    }
}

/* ------------------------ Priorités + associativité ------------------------ */

#[test]
fn associativite_gauche() {
    assert_valeur("8-3-2", 3.0);
    assert_valeur("8/4/2", 1.0);
    assert_valeur("2*6/3", 4.0);
    assert_valeur("10-4+3", 9.0);
}

#[test]
fn priorite_des_operateurs() {
    assert_valeur("2+3*4", 14.0);
    assert_valeur("2*3+4", 10.0);
    assert_valeur("20-6/3", 18.0);
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn multiplication_implicite() {
    assert_valeur("2(3+4)", 14.0);
    assert_valeur("(2+3)(4)", 20.0);
    assert_valeur("(1+1)3", 6.0);
    assert_valeur("2(3)(4)", 24.0);
}

/* ------------------------ Refus ------------------------ */

#[test]
fn parentheses_desequilibrees_refusees() {
    assert_refus("(1+2", ErrorKind::InvalidExpression);
    assert_refus("1+2)", ErrorKind::InvalidExpression);
    assert_refus(")(", ErrorKind::InvalidExpression);
}

#[test]
fn operateurs_mal_places_refuses() {
    assert_refus("+1+2", ErrorKind::InvalidExpression);
    assert_refus("1++2", ErrorKind::InvalidExpression);
    assert_refus("1+", ErrorKind::InvalidExpression);
    assert_refus("(*2)", ErrorKind::InvalidExpression);
    assert_refus("-5", ErrorKind::InvalidExpression);
}

/* ------------------------ Décimaux + imbrication ------------------------ */

#[test]
fn decimaux() {
    assert_valeur("1.5+2.5", 4.0);
    assert_valeur("0.5*0.5", 0.25);
    assert_eq!(format_resultat(eval_ok("0.1+0.2")), "0.30000000000000004");
}

#[test]
fn parentheses_imbriquees() {
    assert_valeur("((1+2)*(3+4))", 21.0);
    assert_valeur("(((7)))", 7.0);
    assert_valeur("2*((3+1)/(1+1))", 4.0);
}

/* ------------------------ Cas numériques dégénérés ------------------------ */

#[test]
fn division_par_zero_selon_politique() {
    assert_refus("1/0", ErrorKind::ArithmeticError);
    assert_refus("5/(3-3)", ErrorKind::ArithmeticError);

    let ieee = ConfigCalc {
        mode_arithmetique: ModeArithmetique::Ieee,
        ..ConfigCalc::default()
    };
    let v = compute("1/0", &ieee).unwrap();
    assert_eq!(format_resultat(v), "Infinity");
    let v = compute("0/0", &ieee).unwrap();
    assert_eq!(format_resultat(v), "NaN");
}

#[test]
fn litteral_a_plusieurs_points() {
    assert_refus("1.2.3+1", ErrorKind::ArithmeticError);
    assert_refus(".", ErrorKind::ArithmeticError);

    let ieee = ConfigCalc {
        mode_arithmetique: ModeArithmetique::Ieee,
        ..ConfigCalc::default()
    };
    assert!(compute("1.2.3+1", &ieee).unwrap().is_nan());
}

#[test]
fn nombre_seul() {
    assert_valeur("42", 42.0);
    assert_valeur("3.", 3.0);
    assert_valeur(".5", 0.5);
}
