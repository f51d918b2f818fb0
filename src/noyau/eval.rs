//! Noyau — évaluation (pipeline réel)
//!
//! nettoyage -> normalize -> verifier -> tokenize -> to_postfix -> evaluate
//!
//! Chaque étape consomme la sortie de la précédente ; aucune ne rappelle
//! une étape antérieure. Aucun état partagé entre deux appels.

use tracing::debug;

use super::erreur::CalcError;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalize_indexe;
use super::rpn::{evaluate, to_postfix};
use super::validation::verifier;
use crate::config::ConfigCalc;

/// Résultat complet : valeur + démarche (pour le panneau d’explication).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Expression après insertion des '*' implicites (c’est elle qu’on affiche).
    pub expression: String,
    pub jetons: String,
    pub postfixe: String,
    pub valeur: f64,
}

impl Evaluation {
    /// "<expression normalisée> = <résultat>" (écran de résultat, `--eval`).
    pub fn ligne(&self) -> String {
        format!("{} = {}", self.expression, format_resultat(self.valeur))
    }
}

/// API publique : évalue une expression brute.
pub fn compute(brute: &str, config: &ConfigCalc) -> Result<f64, CalcError> {
    compute_detaille(brute, config).map(|e| e.valeur)
}

/// Ligne de résultat prête à afficher, ou l’erreur.
pub fn ligne_resultat(brute: &str, config: &ConfigCalc) -> Result<String, CalcError> {
    compute_detaille(brute, config).map(|e| e.ligne())
}

/// Comme `compute`, avec la démarche (jetons, RPN) en plus.
pub fn compute_detaille(brute: &str, config: &ConfigCalc) -> Result<Evaluation, CalcError> {
    // 0) Nettoyage : le champ clavier accepte des espaces (positions de saisie conservées)
    let sans_espaces = brute
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_whitespace());

    // 1) Multiplication implicite
    let (expression, origines) = normalize_indexe(sans_espaces);
    debug!(%expression, "normalisée");

    // 2) Validation : les positions rapportées sont celles de la saisie
    if let Err(raison) = verifier(&expression, &config.regles()) {
        let raison = raison.repositionner(|p| origines.get(p).copied().unwrap_or(p));
        debug!(%expression, %raison, "expression refusée");
        return Err(raison.into());
    }

    // 3) Jetons
    let jetons = tokenize(&expression)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt);

    // 4) RPN
    let rpn = to_postfix(&jetons)?;
    let postfixe = format_tokens(&rpn);
    debug!(%postfixe);

    // 5) Valeur
    let valeur = evaluate::<f64>(&rpn, config.mode_arithmetique).inspect_err(|e| {
        debug!(%expression, erreur = %e, "évaluation impossible");
    })?;
    debug!(valeur);

    Ok(Evaluation {
        expression,
        jetons: jetons_txt,
        postfixe,
        valeur,
    })
}
