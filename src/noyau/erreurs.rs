// src/noyau/erreurs.rs
//
// Erreurs du noyau : une énumération par étape (parse / évaluation)
// + une erreur composée pour parse_and_evaluate.
// Les positions sont des indices de caractères (pas d’octets).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("caractère inattendu '{caractere}' à la position {position}")]
    InvalidToken { caractere: char, position: usize },

    #[error("parenthèses non équilibrées (position {position})")]
    UnbalancedBrackets { position: usize },

    #[error("nombre mal formé '{texte}' à la position {position}")]
    MalformedNumber { texte: String, position: usize },

    #[error("expression invalide: {raison}")]
    MalformedExpression {
        raison: String,
        position: Option<usize>,
    },

    #[error("parenthèses trop imbriquées (limite {limite}, position {position})")]
    NestingTooDeep { limite: usize, position: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("opérandes insuffisants pour '{operateur}' (jeton {index}: {requis} requis, {disponibles} disponibles)")]
    StackUnderflow {
        operateur: String,
        index: usize,
        requis: usize,
        disponibles: usize,
    },

    #[error("résultat invalide: {restants} valeurs restantes sur la pile")]
    MalformedResult { restants: usize },

    #[error("parenthèse inattendue en RPN (jeton {index})")]
    UnexpectedBracket { index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ParseError {
    pub(crate) fn mal_formee(raison: impl Into<String>, position: Option<usize>) -> Self {
        ParseError::MalformedExpression {
            raison: raison.into(),
            position,
        }
    }
}
