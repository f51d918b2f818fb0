//! Calculatrice infixe
//!
//! - `noyau`  : pipeline pur (normalisation, validation, jetons, RPN, évaluation)
//! - `config` : politiques configurables (JSON)
//! - `app`    : coquille egui (état + vue), natif et wasm

pub mod app;
pub mod config;
pub mod noyau;
