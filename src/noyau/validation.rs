// src/noyau/validation.rs
//
// Validation syntaxique AVANT découpage en jetons.
// Contrats :
// - Parenthèses équilibrées (échec immédiat sur ')' orpheline)
// - Chaque opérateur : à gauche un chiffre ou ')', à droite un chiffre ou '('
// - Politique configurable : exiger au moins un opérateur (désactivée par défaut)

use super::erreur::Invalidite;
use super::jetons::{is_number_char, Operator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegleValidation {
    /// Refuse les expressions purement numériques ("42").
    pub exiger_operateur: bool,
}

/// Vrai si l’expression passe toutes les vérifications (règles par défaut).
pub fn is_valid(expression: &str) -> bool {
    verifier(expression, &RegleValidation::default()).is_ok()
}

/// Comme `is_valid`, mais renvoie la première raison de refus.
pub fn verifier(expression: &str, regles: &RegleValidation) -> Result<(), Invalidite> {
    let chars: Vec<char> = expression.chars().collect();

    if chars.is_empty() {
        return Err(Invalidite::Vide);
    }

    verifier_alphabet(&chars)?;
    verifier_parentheses(&chars)?;
    let nb_operateurs = verifier_operateurs(&chars)?;

    if regles.exiger_operateur && nb_operateurs == 0 {
        return Err(Invalidite::AucunOperateur);
    }

    Ok(())
}

fn verifier_alphabet(chars: &[char]) -> Result<(), Invalidite> {
    for (position, &c) in chars.iter().enumerate() {
        let connu = is_number_char(c) || c == '(' || c == ')' || Operator::from_char(c).is_some();
        if !connu {
            return Err(Invalidite::CaractereInattendu {
                caractere: c,
                position,
            });
        }
    }
    Ok(())
}

fn verifier_parentheses(chars: &[char]) -> Result<(), Invalidite> {
    let mut ouvertes: usize = 0;

    for (position, &c) in chars.iter().enumerate() {
        match c {
            '(' => ouvertes += 1,
            ')' => {
                if ouvertes == 0 {
                    return Err(Invalidite::ParentheseFermanteOrpheline { position });
                }
                ouvertes -= 1;
            }
            _ => {}
        }
    }

    if ouvertes > 0 {
        return Err(Invalidite::ParenthesesNonFermees {
            restantes: ouvertes,
        });
    }
    Ok(())
}

/// Renvoie le nombre d’opérateurs rencontrés.
fn verifier_operateurs(chars: &[char]) -> Result<usize, Invalidite> {
    let mut nb = 0;

    for (position, &c) in chars.iter().enumerate() {
        if Operator::from_char(c).is_none() {
            continue;
        }

        // début / fin de chaîne : voisin absent => refus
        let prev = position.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(position + 1).copied();

        let gauche_ok = matches!(prev, Some(p) if p.is_ascii_digit() || p == ')');
        let droite_ok = matches!(next, Some(n) if n.is_ascii_digit() || n == '(');

        if !(gauche_ok && droite_ok) {
            return Err(Invalidite::OperateurMalPlace {
                operateur: c,
                position,
            });
        }
        nb += 1;
    }

    Ok(nb)
}
