//! Calculatrice RPN — bibliothèque
//!
//! Expression infixe -> suite postfixée (shunting-yard) -> valeur f64.
//! Le binaire (src/main.rs) n’est qu’une interface egui au-dessus de ce noyau.

pub mod noyau;

pub use noyau::{
    evaluate_postfix, parse, parse_and_evaluate, parse_with, EvalError, ExpressionError, Options,
    ParseError, PostfixSequence, Token,
};
