//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN (shunting-yard) -> pile de f64 -> valeur
//!
//! Remarque : l’évaluateur ne dépend QUE de la suite postfixée ;
//! il accepte aussi une suite construite à la main (et la refuse proprement si elle est invalide).

use tracing::debug;

use super::erreurs::{EvalError, ExpressionError};
use super::jetons::{PostfixSequence, Token};
use super::rpn::parse;

/// Évalue une suite postfixée avec une seule pile.
///
/// - `a b -` = a - b (ordre textuel)
/// - division par zéro : IEEE (±inf / NaN), pas une erreur
pub fn evaluate_postfix(sequence: &PostfixSequence) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(sequence.len());

    for (index, tok) in sequence.tokens().iter().enumerate() {
        match *tok {
            Token::Number(v) => pile.push(v),

            Token::BinaryOperator(op) => {
                if pile.len() < 2 {
                    return Err(EvalError::StackUnderflow {
                        operateur: op.symbol().to_string(),
                        index,
                        requis: 2,
                        disponibles: pile.len(),
                    });
                }
                let b = pile.pop().unwrap_or_default();
                let a = pile.pop().unwrap_or_default();
                pile.push(op.applique(a, b));
            }

            Token::UnaryOperator(op) => match pile.pop() {
                Some(x) => pile.push(op.applique(x)),
                None => {
                    return Err(EvalError::StackUnderflow {
                        operateur: op.symbol().to_string(),
                        index,
                        requis: 1,
                        disponibles: 0,
                    })
                }
            },

            Token::OpenBracket | Token::CloseBracket => {
                return Err(EvalError::UnexpectedBracket { index })
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedResult {
            restants: pile.len(),
        }),
    }
}

/// API publique : parse puis évalue. Une erreur de parse court-circuite l’évaluation.
pub fn parse_and_evaluate(expression: &str) -> Result<f64, ExpressionError> {
    let sequence = parse(expression)?;
    let valeur = evaluate_postfix(&sequence)?;
    debug!(expression, valeur, "évaluation");
    Ok(valeur)
}
