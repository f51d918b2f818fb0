// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - InvalidExpression   : refus du validateur (raison détaillée)
// - MalformedExpression : invariant de pile violé malgré la validation (filet)
// - Arithmetic          : résultat numérique dégénéré (mode strict)

use thiserror::Error;

/// Raison précise d’un refus par le validateur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalidite {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu '{caractere}' en position {position}")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("parenthèse fermante sans ouvrante en position {position}")]
    ParentheseFermanteOrpheline { position: usize },

    #[error("{restantes} parenthèse(s) non fermée(s)")]
    ParenthesesNonFermees { restantes: usize },

    #[error("opérateur '{operateur}' mal placé en position {position}")]
    OperateurMalPlace { operateur: char, position: usize },

    #[error("aucun opérateur")]
    AucunOperateur,
}

impl Invalidite {
    /// Remplace la position (indice dans l’expression normalisée) par `origine(position)`.
    pub fn repositionner(self, origine: impl Fn(usize) -> usize) -> Self {
        match self {
            Invalidite::CaractereInattendu {
                caractere,
                position,
            } => Invalidite::CaractereInattendu {
                caractere,
                position: origine(position),
            },
            Invalidite::ParentheseFermanteOrpheline { position } => {
                Invalidite::ParentheseFermanteOrpheline {
                    position: origine(position),
                }
            }
            Invalidite::OperateurMalPlace {
                operateur,
                position,
            } => Invalidite::OperateurMalPlace {
                operateur,
                position: origine(position),
            },
            autre => autre,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,

    #[error("nombre invalide: {0}")]
    LitteralInvalide(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("expression invalide ({0})")]
    InvalidExpression(#[from] Invalidite),

    #[error("expression malformée ({0})")]
    MalformedExpression(&'static str),

    #[error("erreur arithmétique ({0})")]
    Arithmetic(#[from] ArithmeticError),
}

/// Catégorie seule, pour l’appelant qui ne veut pas le détail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidExpression,
    MalformedExpression,
    ArithmeticError,
}

impl ErrorKind {
    /// Titre de la fenêtre d’erreur.
    pub fn titre(self) -> &'static str {
        match self {
            ErrorKind::InvalidExpression => "Expression invalide",
            ErrorKind::MalformedExpression => "Expression malformée",
            ErrorKind::ArithmeticError => "Erreur arithmétique",
        }
    }
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidExpression(_) => ErrorKind::InvalidExpression,
            CalcError::MalformedExpression(_) => ErrorKind::MalformedExpression,
            CalcError::Arithmetic(_) => ErrorKind::ArithmeticError,
        }
    }
}
