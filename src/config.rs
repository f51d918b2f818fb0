// src/config.rs
//
// Configuration (JSON) : politiques du noyau + valeur d’affichage par défaut.
// Chaque champ a une valeur par défaut : un fichier partiel (ou "{}") est valide.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;
use tracing::{debug, info};

use crate::noyau::rpn::ModeArithmetique;
use crate::noyau::validation::RegleValidation;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("lecture de la configuration impossible: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration JSON invalide: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigCalc {
    /// Refuse les expressions sans opérateur ("42").
    #[serde(default)]
    pub exiger_operateur: bool,

    #[serde(default)]
    pub mode_arithmetique: ModeArithmetique,

    /// Contenu de l’écran après "C", "=" ou une erreur.
    #[serde(default = "default_expression")]
    pub expression_defaut: String,
}

impl Default for ConfigCalc {
    fn default() -> Self {
        Self {
            exiger_operateur: false,
            mode_arithmetique: ModeArithmetique::default(),
            expression_defaut: default_expression(),
        }
    }
}

impl ConfigCalc {
    pub fn regles(&self) -> RegleValidation {
        RegleValidation {
            exiger_operateur: self.exiger_operateur,
        }
    }
}

pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigCalc, ConfigError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn from_str(s: &str) -> Result<ConfigCalc, ConfigError> {
    Ok(serde_json::from_str(s)?)
}

/// Chemin absent => défauts. Chemin donné mais fichier manquant => défauts aussi.
pub fn charger(path: Option<&Path>) -> Result<ConfigCalc, ConfigError> {
    let Some(path) = path else {
        return Ok(ConfigCalc::default());
    };

    if !path.exists() {
        info!(chemin = %path.display(), "configuration absente, valeurs par défaut");
        return Ok(ConfigCalc::default());
    }

    let config = from_file(path)?;
    info!(chemin = %path.display(), "configuration chargée");
    debug!(?config);
    Ok(config)
}

fn default_expression() -> String {
    "0".to_string()
}
