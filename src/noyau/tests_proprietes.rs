//! Propriétés (proptest) : déterminisme, aller-retour des jetons,
//! idempotence de la normalisation, accord avec une évaluation de référence.

use proptest::prelude::*;

use super::compute;
use super::jetons::tokenize;
use super::normalise::normalize;
use super::rpn::ModeArithmetique;
use crate::config::ConfigCalc;

/// Chaînes quelconques sur l’alphabet de la calculatrice (souvent malformées).
fn alphabet_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '7', '9', '.', '+', '-', '*', '/', '(', ')',
        ]),
        0..24,
    )
    .prop_map(|v| v.into_iter().collect())
}

/// Arbre d’expression bien formé : rendu texte + valeur de référence.
#[derive(Clone, Debug)]
enum Arbre {
    Feuille(u32),
    Noeud(Box<Arbre>, char, Box<Arbre>),
}

impl Arbre {
    fn texte(&self) -> String {
        match self {
            Arbre::Feuille(n) => n.to_string(),
            Arbre::Noeud(a, op, b) => format!("({}{op}{})", a.texte(), b.texte()),
        }
    }

    fn valeur(&self) -> f64 {
        match self {
            Arbre::Feuille(n) => f64::from(*n),
            Arbre::Noeud(a, op, b) => {
                let (x, y) = (a.valeur(), b.valeur());
                match op {
                    '+' => x + y,
                    '-' => x - y,
                    '*' => x * y,
                    _ => x / y,
                }
            }
        }
    }
}

fn arbre_strategy() -> impl Strategy<Value = Arbre> {
    let feuille = (0u32..1000).prop_map(Arbre::Feuille);
    feuille.prop_recursive(4, 32, 2, |inner| {
        (
            inner.clone(),
            prop::sample::select(vec!['+', '-', '*', '/']),
            inner,
        )
            .prop_map(|(a, op, b)| Arbre::Noeud(Box::new(a), op, Box::new(b)))
    })
}

fn ieee() -> ConfigCalc {
    ConfigCalc {
        mode_arithmetique: ModeArithmetique::Ieee,
        ..ConfigCalc::default()
    }
}

proptest! {
    #[test]
    fn normalisation_idempotente(s in alphabet_strategy()) {
        let une = normalize(&s);
        prop_assert_eq!(normalize(&une), une);
    }

    #[test]
    fn jetons_aller_retour(s in alphabet_strategy()) {
        let n = normalize(&s);
        let toks = tokenize(&n).unwrap();
        let recolle: String = toks.iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(recolle, n);
    }

    #[test]
    fn compute_deterministe(s in alphabet_strategy()) {
        let config = ConfigCalc::default();
        let a = compute(&s, &config).map(f64::to_bits);
        let b = compute(&s, &config).map(f64::to_bits);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn jamais_de_panique_en_ieee(s in alphabet_strategy()) {
        let _ = compute(&s, &ieee());
    }

    #[test]
    fn accord_avec_reference(arbre in arbre_strategy()) {
        let attendu = arbre.valeur();
        let obtenu = compute(&arbre.texte(), &ieee()).unwrap();
        if attendu.is_nan() {
            prop_assert!(obtenu.is_nan());
        } else {
            prop_assert_eq!(obtenu, attendu);
        }
    }
}
