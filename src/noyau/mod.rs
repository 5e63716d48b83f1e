//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - operateurs.rs : table des opérateurs (symboles, priorités, arité, application)
//! - jetons.rs     : tokenisation + suite postfixée (rendu canonique)
//! - rpn.rs        : shunting-yard (pile explicite de cadres pour les parenthèses)
//! - eval.rs       : évaluation de la suite postfixée + pipeline complet
//! - erreurs.rs    : erreurs typées (parse / évaluation)
//! - options.rs    : réglages du parseur

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod options;
pub mod rpn;

#[cfg(test)]
mod tests_postfixe;



// API publique minimale
pub use erreurs::{EvalError, ExpressionError, ParseError};
pub use eval::{evaluate_postfix, parse_and_evaluate};
pub use jetons::{format_tokens, scan_number, tokenize, Jeton, PostfixSequence, Token};
pub use operateurs::{BinOp, Operator, UnOp};
pub use options::Options;
pub use rpn::{parse, parse_with};
