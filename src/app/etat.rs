//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (écran, ligne de résultat,
//! notification d’erreur, démarche) et les actions des touches.
//!
//! Contrats :
//! - L’écran vaut `expression_defaut` ("0") au départ, après "C", après "=".
//! - Une touche remplace l’écran s’il vaut exactement la valeur par défaut, sinon s’ajoute.
//! - "=" : succès => "<expression normalisée> = <résultat>" ; échec => notification.
//!   Dans les deux cas l’écran revient à la valeur par défaut.
//! - Le noyau reste pur : tout l’état d’affichage vit ici.

use tracing::info;

use crate::config::ConfigCalc;
use crate::noyau::{compute_detaille, CalcError, ErrorKind};

/// Erreur à présenter à l’utilisateur (fenêtre modale).
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: ErrorKind,
    pub message: String,
}

impl Notification {
    pub fn titre(&self) -> &'static str {
        self.kind.titre()
    }
}

impl From<&CalcError> for Notification {
    fn from(err: &CalcError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String, // "<expression> = <valeur>"
    pub notification: Option<Notification>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub config: ConfigCalc,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’écran après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_config(ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn avec_config(config: ConfigCalc) -> Self {
        Self {
            expression: config.expression_defaut.clone(),
            resultat: String::new(),
            notification: None,
            demarche: Demarche::default(),
            config,
            focus_entree: true,
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Chiffre, point, opérateur ou parenthèse.
    pub fn saisir(&mut self, symbole: &str) {
        if self.expression == self.config.expression_defaut {
            self.expression = symbole.to_string();
        } else {
            self.expression.push_str(symbole);
        }
        self.focus_entree = true;
    }

    /// C : l’écran revient à la valeur par défaut (résultat conservé).
    pub fn effacer(&mut self) {
        self.reinitialiser_ecran();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole.
    pub fn retour_arriere(&mut self) {
        self.expression.pop();
        if self.expression.is_empty() {
            self.reinitialiser_ecran();
        }
        self.focus_entree = true;
    }

    /// = : évalue l’écran via le noyau.
    pub fn evaluer(&mut self) {
        match compute_detaille(&self.expression, &self.config) {
            Ok(e) => {
                self.resultat = e.ligne();
                self.demarche = Demarche {
                    jetons: e.jetons,
                    postfixe: e.postfixe,
                };
                self.notification = None;
            }
            Err(err) => {
                info!(expression = %self.expression, erreur = %err, "notification");
                self.notification = Some(Notification::from(&err));
                self.demarche = Demarche::default();
            }
        }
        self.reinitialiser_ecran();
        self.focus_entree = true;
    }

    pub fn fermer_notification(&mut self) {
        self.notification = None;
        self.focus_entree = true;
    }

    fn reinitialiser_ecran(&mut self) {
        self.expression = self.config.expression_defaut.clone();
    }
}
