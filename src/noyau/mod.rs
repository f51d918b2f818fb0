//! Noyau de la calculatrice infixe
//!
//! Organisation interne :
//! - normalise.rs  : multiplication implicite ("2(3)" -> "2*(3)")
//! - validation.rs : parenthèses + placement des opérateurs
//! - jetons.rs     : Token / Operator + tokenisation
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - format.rs     : affichage du résultat
//! - erreur.rs     : taxonomie des erreurs
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{CalcError, ErrorKind};
pub use eval::{compute, compute_detaille, ligne_resultat, Evaluation};
pub use format::format_resultat;
