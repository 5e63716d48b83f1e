// src/noyau/operateurs.rs
//
// Table des opérateurs : symboles, priorités, arité, application.
//
// Priorités (plus grand = lie plus fort) :
//   unaires (++, --, sin, cos, ...) = 4
//   ^                               = 3
//   * /                             = 2
//   + -                             = 1
//
// NOTE:
// - `^` n’est PAS associatif à droite ici : on dépile sur `>=`,
//   donc 2^3^2 = (2^3)^2 = 64.

use std::fmt;

/// Opérateurs binaires (deux opérandes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Opérateurs unaires : signes (`++`, `--`) et fonctions d’extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnOp {
    Plus,
    Minus,
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Log,
}

/// Opérateur quelconque (pile d’opérateurs du parseur).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinOp),
    Unary(UnOp),
}

/// Noms reconnus par la règle “mot-clé” du tokenizer.
const FONCTIONS: [(&str, UnOp); 7] = [
    ("sin", UnOp::Sin),
    ("cos", UnOp::Cos),
    ("tan", UnOp::Tan),
    ("arcsin", UnOp::Arcsin),
    ("arccos", UnOp::Arccos),
    ("arctan", UnOp::Arctan),
    ("log", UnOp::Log),
];

/// Noms de fonctions, dans l’ordre de la table.
pub fn noms_fonctions() -> impl Iterator<Item = &'static str> {
    FONCTIONS.iter().map(|(nom, _)| *nom)
}

impl BinOp {
    /// Opérateur binaire pour un caractère, s’il en est un.
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '^' => Some(BinOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }

    pub fn priorite(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 3,
        }
    }

    /// `a op b` dans l’ordre textuel (a = premier empilé).
    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            // IEEE : x/0 => ±inf ou NaN, pas d’erreur
            BinOp::Div => a / b,
            BinOp::Pow => a.powf(b),
        }
    }

    /// Version unaire d’un signe binaire (`+` -> `++`, `-` -> `--`).
    pub fn en_signe(self) -> Option<UnOp> {
        match self {
            BinOp::Add => Some(UnOp::Plus),
            BinOp::Sub => Some(UnOp::Minus),
            _ => None,
        }
    }
}

impl UnOp {
    /// Fonction d’extension pour un mot (déjà en minuscules).
    pub fn fonction(nom: &str) -> Option<UnOp> {
        FONCTIONS
            .iter()
            .find(|(n, _)| *n == nom)
            .map(|(_, op)| *op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Plus => "++",
            UnOp::Minus => "--",
            UnOp::Sin => "sin",
            UnOp::Cos => "cos",
            UnOp::Tan => "tan",
            UnOp::Arcsin => "arcsin",
            UnOp::Arccos => "arccos",
            UnOp::Arctan => "arctan",
            UnOp::Log => "log",
        }
    }

    pub fn priorite(self) -> u8 {
        4
    }

    pub fn est_fonction(self) -> bool {
        !matches!(self, UnOp::Plus | UnOp::Minus)
    }

    pub fn applique(self, x: f64) -> f64 {
        match self {
            UnOp::Plus => x,
            UnOp::Minus => -x,
            UnOp::Sin => x.sin(),
            UnOp::Cos => x.cos(),
            UnOp::Tan => x.tan(),
            UnOp::Arcsin => x.asin(),
            UnOp::Arccos => x.acos(),
            UnOp::Arctan => x.atan(),
            // logarithme naturel
            UnOp::Log => x.ln(),
        }
    }
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Binary(op) => op.symbol(),
            Operator::Unary(op) => op.symbol(),
        }
    }

    pub fn priorite(self) -> u8 {
        match self {
            Operator::Binary(op) => op.priorite(),
            Operator::Unary(op) => op.priorite(),
        }
    }

    pub fn arite(self) -> usize {
        match self {
            Operator::Binary(_) => 2,
            Operator::Unary(_) => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
