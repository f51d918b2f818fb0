// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Token en RPN (postfix)
// - Puis évaluer la RPN sur une pile numérique
//
// Règles:
// - Tous les opérateurs sont associatifs à gauche : on dépile tant que
//   priorité(sommet) >= priorité(courant), donc "8-3-2" => "8 3 - 2 -".
// - Les parenthèses ne sortent jamais en RPN.

use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::erreur::{ArithmeticError, CalcError};
use super::jetons::{Operator, Token};

/// Politique face aux résultats numériques dégénérés.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeArithmetique {
    /// Division par zéro, littéral illisible, ±∞/NaN => erreur.
    #[default]
    Strict,
    /// Flottants bruts : ±∞ et NaN sont des résultats comme les autres.
    Ieee,
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Number(2), Operator(Add), Number(3), Operator(Mul), Number(4)]
///   rpn:    [Number(2), Number(3), Number(4), Operator(Mul), Operator(Add)]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Token::Number(_) => out.push(tok),

            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = ops.last() {
                    if top.priority() < op.priority() {
                        break;
                    }
                    out.push(Token::Operator(*top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Token::LeftParen => ops.push(tok),

            Token::RightParen => loop {
                match ops.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => out.push(top),
                    None => {
                        return Err(CalcError::MalformedExpression(
                            "parenthèse fermante sans ouvrante",
                        ))
                    }
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Token::LeftParen {
            return Err(CalcError::MalformedExpression("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// Le premier opérande dépilé est l’opérande DROIT (important pour `-` et `/`).
/// À la fin, la pile doit contenir exactement une valeur.
pub fn evaluate<T>(postfix: &[Token], mode: ModeArithmetique) -> Result<T, CalcError>
where
    T: Float + FromStr,
{
    let mut st: Vec<T> = Vec::with_capacity(postfix.len() / 2 + 1);

    for tok in postfix {
        match tok {
            Token::Number(texte) => {
                let v = lire_nombre::<T>(texte, mode)?;
                st.push(v);
            }

            Token::Operator(op) => {
                let droite = st
                    .pop()
                    .ok_or(CalcError::MalformedExpression("opérande manquant"))?;
                let gauche = st
                    .pop()
                    .ok_or(CalcError::MalformedExpression("opérande manquant"))?;

                if mode == ModeArithmetique::Strict && *op == Operator::Div && droite.is_zero() {
                    return Err(ArithmeticError::DivisionParZero.into());
                }

                let r = op.apply(gauche, droite);
                if mode == ModeArithmetique::Strict && !r.is_finite() {
                    return Err(ArithmeticError::NonFini.into());
                }

                trace!(operateur = %op.symbol(), "réduction");
                st.push(r);
            }

            Token::LeftParen | Token::RightParen => {
                return Err(CalcError::MalformedExpression("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (None, _) => Err(CalcError::MalformedExpression("expression vide")),
        (Some(_), false) => Err(CalcError::MalformedExpression("opérandes en trop")),
    }
}

fn lire_nombre<T>(texte: &str, mode: ModeArithmetique) -> Result<T, CalcError>
where
    T: Float + FromStr,
{
    match (texte.parse::<T>(), mode) {
        (Ok(v), ModeArithmetique::Strict) if !v.is_finite() => Err(ArithmeticError::NonFini.into()),
        (Ok(v), _) => Ok(v),
        (Err(_), ModeArithmetique::Ieee) => Ok(T::nan()),
        (Err(_), ModeArithmetique::Strict) => {
            Err(ArithmeticError::LitteralInvalide(texte.to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};
    use pretty_assertions::assert_eq;

    fn rpn_txt(s: &str) -> String {
        let toks = tokenize(s).unwrap();
        format_tokens(&to_postfix(&toks).unwrap())
    }

    fn eval_f64(s: &str, mode: ModeArithmetique) -> Result<f64, CalcError> {
        let toks = tokenize(s).unwrap();
        evaluate::<f64>(&to_postfix(&toks)?, mode)
    }

    #[test]
    fn priorite_et_associativite() {
        assert_eq!(rpn_txt("2+3*4"), "2 3 4 * +");
        assert_eq!(rpn_txt("8-3-2"), "8 3 - 2 -");
        assert_eq!(rpn_txt("8/4/2"), "8 4 / 2 /");
        assert_eq!(rpn_txt("2*3+4"), "2 3 * 4 +");
    }

    #[test]
    fn parentheses_disparaissent() {
        assert_eq!(rpn_txt("(1+2)*(3+4)"), "1 2 + 3 4 + *");
        assert_eq!(rpn_txt("((5))"), "5");
    }

    #[test]
    fn conversion_defensive() {
        let toks = tokenize("1+2)").unwrap();
        assert!(matches!(
            to_postfix(&toks),
            Err(CalcError::MalformedExpression(_))
        ));

        let toks = tokenize("(1+2").unwrap();
        assert!(matches!(
            to_postfix(&toks),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn evaluation_de_base() {
        assert_eq!(eval_f64("8-3-2", ModeArithmetique::Strict), Ok(3.0));
        assert_eq!(eval_f64("8/4/2", ModeArithmetique::Strict), Ok(1.0));
        assert_eq!(eval_f64("2+3*4", ModeArithmetique::Strict), Ok(14.0));
        assert_eq!(eval_f64("1.5+2.5", ModeArithmetique::Strict), Ok(4.0));
    }

    #[test]
    fn generique_f32() {
        let toks = tokenize("1.5*4").unwrap();
        let v: f32 = evaluate(&to_postfix(&toks).unwrap(), ModeArithmetique::Strict).unwrap();
        assert_eq!(v, 6.0_f32);
    }

    #[test]
    fn pile_insuffisante() {
        let rpn = vec![Token::Number("1".into()), Token::Operator(Operator::Add)];
        assert!(matches!(
            evaluate::<f64>(&rpn, ModeArithmetique::Strict),
            Err(CalcError::MalformedExpression(_))
        ));
        assert!(matches!(
            evaluate::<f64>(&[], ModeArithmetique::Ieee),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn parenthese_en_rpn_refusee() {
        for tok in [Token::LeftParen, Token::RightParen] {
            assert_eq!(
                evaluate::<f64>(&[tok], ModeArithmetique::Strict),
                Err(CalcError::MalformedExpression("parenthèse inattendue en RPN"))
            );
        }
        let rpn = vec![
            Token::Number("1".into()),
            Token::LeftParen,
            Token::Number("2".into()),
            Token::Operator(Operator::Add),
        ];
        assert!(matches!(
            evaluate::<f64>(&rpn, ModeArithmetique::Ieee),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn operandes_en_trop() {
        let rpn = vec![Token::Number("1".into()), Token::Number("2".into())];
        assert!(matches!(
            evaluate::<f64>(&rpn, ModeArithmetique::Strict),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn division_par_zero_selon_mode() {
        assert_eq!(
            eval_f64("1/0", ModeArithmetique::Strict),
            Err(ArithmeticError::DivisionParZero.into())
        );
        assert_eq!(eval_f64("1/0", ModeArithmetique::Ieee), Ok(f64::INFINITY));
        assert!(eval_f64("0/0", ModeArithmetique::Ieee).unwrap().is_nan());
        assert_eq!(
            eval_f64("1/(2-2)", ModeArithmetique::Strict),
            Err(ArithmeticError::DivisionParZero.into())
        );
    }

    #[test]
    fn litteral_illisible_selon_mode() {
        assert_eq!(
            eval_f64("1.2.3+1", ModeArithmetique::Strict),
            Err(ArithmeticError::LitteralInvalide("1.2.3".into()).into())
        );
        assert!(eval_f64("1.2.3+1", ModeArithmetique::Ieee).unwrap().is_nan());
    }

    #[test]
    fn depassement_strict() {
        let grand = "9".repeat(400);
        assert_eq!(
            eval_f64(&grand, ModeArithmetique::Strict),
            Err(ArithmeticError::NonFini.into())
        );
    }
}
