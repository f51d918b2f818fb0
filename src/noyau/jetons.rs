// src/noyau/jetons.rs

use std::fmt;

use num_traits::Float;

use super::erreur::CalcError;

/// Les quatre opérateurs binaires (tous associatifs à gauche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Table des priorités : `+ -` → 1, `* /` → 2.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Sémantique IEEE brute (pas de garde sur la division par zéro).
    pub fn apply<T: Float>(self, gauche: T, droite: T) -> T {
        match self {
            Operator::Add => gauche + droite,
            Operator::Sub => gauche - droite,
            Operator::Mul => gauche * droite,
            Operator::Div => gauche / droite,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Texte brut (chiffres + points), converti seulement à l’évaluation.
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(texte) => f.write_str(texte),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Découpe une chaîne en jetons, en un seul passage.
///
/// Purement lexical : une suite de chiffres et de points devient un seul
/// `Number`, même si elle contient plusieurs points (`1.2.3`). La conversion
/// numérique est faite par l’évaluateur.
pub fn tokenize(s: &str) -> Result<Vec<Token>, CalcError> {
    let mut out = Vec::new();
    let mut tampon = String::new();

    for c in s.chars() {
        if is_number_char(c) {
            tampon.push(c);
            continue;
        }

        if !tampon.is_empty() {
            out.push(Token::Number(std::mem::take(&mut tampon)));
        }

        let tok = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => match Operator::from_char(c) {
                Some(op) => Token::Operator(op),
                None => return Err(CalcError::MalformedExpression("caractère hors alphabet")),
            },
        };
        out.push(tok);
    }

    if !tampon.is_empty() {
        out.push(Token::Number(tampon));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
