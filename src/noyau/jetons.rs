// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ParseError;
use super::operateurs::{BinOp, Operator, UnOp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),

    // NOTE: le tokenizer ne produit que des BinaryOperator pour + et - ;
    // c’est le parseur qui décide du signe unaire (lookback).
    BinaryOperator(BinOp),
    UnaryOperator(UnOp),

    OpenBracket,
    CloseBracket,
}

/// Jeton + position (indice de caractère) dans l’expression source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Token,
    pub pos: usize,
}

impl Token {
    /// Vrai si le jeton termine une valeur (nombre ou parenthèse fermante).
    pub fn termine_valeur(&self) -> bool {
        matches!(self, Token::Number(_) | Token::CloseBracket)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Binary(b) => Token::BinaryOperator(b),
            Operator::Unary(u) => Token::UnaryOperator(u),
        }
    }
}

/// Nombre avec au moins un chiffre décimal : 5 -> "5.0", 1e20 -> "1.0e20".
pub fn format_nombre(v: f64) -> String {
    let mut s = format!("{v:?}");
    if v.is_finite() && !s.contains('.') {
        match s.find('e') {
            Some(i) => s.insert_str(i, ".0"),
            None => s.push_str(".0"),
        }
    }
    s
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => f.write_str(&format_nombre(*v)),
            Token::BinaryOperator(op) => f.write_str(op.symbol()),
            Token::UnaryOperator(op) => f.write_str(op.symbol()),
            Token::OpenBracket => f.write_str("("),
            Token::CloseBracket => f.write_str(")"),
        }
    }
}

/// Suite postfixée (RPN) : seul format d’échange entre parseur et évaluateur.
///
/// Rendu canonique : `[5.0, 2.0, +]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostfixSequence(Vec<Token>);

impl PostfixSequence {
    /// Construit une suite telle quelle (aucune vérification de structure :
    /// c’est l’évaluateur qui refuse une suite invalide).
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{t}")?;
        }
        f.write_str("]")
    }
}

fn debut_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Plus longue suite de `[0-9.]` à partir de `start`.
///
/// Retourne (texte, indice juste après). Si `start` ne pointe pas sur un chiffre
/// ou un point : texte vide et `start` inchangé.
pub fn scan_number(chars: &[char], start: usize) -> (String, usize) {
    let mut i = start;
    while i < chars.len() && debut_nombre(chars[i]) {
        i += 1;
    }
    let texte: String = chars.get(start..i).unwrap_or(&[]).iter().collect();
    (texte, i)
}

/// Texte d’un nombre -> f64. Plus d’un point (ou un point seul) => MalformedNumber.
fn lire_nombre(texte: &str, position: usize) -> Result<f64, ParseError> {
    let mal_forme = || ParseError::MalformedNumber {
        texte: texte.to_string(),
        position,
    };
    if texte.matches('.').count() > 1 {
        return Err(mal_forme());
    }
    texte.parse::<f64>().map_err(|_| mal_forme())
}

/// Tokenize une chaîne en jetons positionnés.
/// Supporte:
/// - nombres décimaux (ex: 12, 2.456, .5, 5.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - fonctions sin cos tan arcsin arccos arctan log (insensibles à la casse)
/// - espaces (ignorés)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ParseError> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' || c == ')' {
            let tok = if c == '(' {
                Token::OpenBracket
            } else {
                Token::CloseBracket
            };
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = BinOp::from_char(c) {
            out.push(Jeton {
                tok: Token::BinaryOperator(op),
                pos: i,
            });
            i += 1;
            continue;
        }

        // Nombre
        if debut_nombre(c) {
            let (texte, suivant) = scan_number(&chars, i);
            let v = lire_nombre(&texte, i)?;
            out.push(Jeton {
                tok: Token::Number(v),
                pos: i,
            });
            i = suivant;
            continue;
        }

        // Mot-clé : on lit le mot entier, puis on vérifie que c’est une fonction connue
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect::<String>().to_lowercase();
            match UnOp::fonction(&mot) {
                Some(f) => out.push(Jeton {
                    tok: Token::UnaryOperator(f),
                    pos: start,
                }),
                None => {
                    return Err(ParseError::InvalidToken {
                        caractere: c,
                        position: start,
                    })
                }
            }
            continue;
        }

        return Err(ParseError::InvalidToken {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.tok.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
