// src/noyau/rpn.rs
//
// Shunting-yard -> suite postfixée (RPN)
//
// Règles:
// - '+' / '-' sans valeur juste avant (début, opérateur, '(') => signe unaire `++` / `--`
// - opérateur binaire : réduit tant que priorité(sommet) >= priorité(nouveau)
//   => groupement strict de gauche à droite, y compris pour '^'
// - opérateur unaire (signe ou fonction) : préfixe, empilé sans réduire
// - '(' ouvre un cadre (sous-expression indépendante), ')' le ferme et pousse sa
//   suite comme UN opérande sur le cadre parent
//
// NOTE:
// - Pas de récursion : pile explicite de cadres, bornée par Options::profondeur_max.
// - Une “réduction” concatène opérande1 opérande2 opérateur (ordre textuel).

use tracing::{debug, trace};

use super::erreurs::ParseError;
use super::jetons::{tokenize, Jeton, PostfixSequence, Token};
use super::operateurs::Operator;
use super::options::Options;

/// Opérande en attente : feuille numérique ou suite déjà réduite.
#[derive(Clone, Debug, PartialEq)]
enum Operande {
    Nombre(f64),
    SousSequence(Vec<Token>),
}

impl Operande {
    fn etendre(self, out: &mut Vec<Token>) {
        match self {
            Operande::Nombre(v) => out.push(Token::Number(v)),
            Operande::SousSequence(s) => out.extend(s),
        }
    }

    fn en_tokens(self) -> Vec<Token> {
        match self {
            Operande::Nombre(v) => vec![Token::Number(v)],
            Operande::SousSequence(s) => s,
        }
    }
}

/// Un niveau de parenthèses (le cadre racine n’a pas d’ouverture).
#[derive(Debug, Default)]
struct Cadre {
    ouverture: Option<usize>,
    operandes: Vec<Operande>,
    operateurs: Vec<(Operator, usize)>,
}

impl Cadre {
    fn ouvert_a(pos: usize) -> Self {
        Self {
            ouverture: Some(pos),
            ..Self::default()
        }
    }

    /// Dépile UN opérateur et ses opérandes, repousse la sous-suite obtenue.
    fn reduire(&mut self) -> Result<(), ParseError> {
        let Some((op, pos)) = self.operateurs.pop() else {
            return Ok(());
        };

        let arite = op.arite();
        if self.operandes.len() < arite {
            return Err(ParseError::mal_formee(
                format!("opérateur '{op}' sans opérande"),
                Some(pos),
            ));
        }

        // le plus récent est le SECOND opérande
        let debut = self.operandes.len() - arite;
        let mut pris = self.operandes.drain(debut..).collect::<Vec<_>>().into_iter();

        // on réutilise la suite du premier opérande (chaînes a+b+c+... en O(n))
        let mut out = match pris.next() {
            Some(premier) => premier.en_tokens(),
            None => Vec::new(),
        };
        for o in pris {
            o.etendre(&mut out);
        }
        out.push(Token::from(op));

        trace!(operateur = %op, longueur = out.len(), "réduction");
        self.operandes.push(Operande::SousSequence(out));
        Ok(())
    }

    /// Vide la pile d’opérateurs puis choisit le résultat du cadre.
    fn terminer(mut self) -> Result<Vec<Token>, ParseError> {
        while !self.operateurs.is_empty() {
            self.reduire()?;
        }

        let n = self.operandes.len();
        match self.operandes.pop() {
            // vide (ou seulement des espaces) => [0.0]
            None => Ok(vec![Token::Number(0.0)]),
            Some(o) if n == 1 => Ok(o.en_tokens()),
            Some(_) => Err(ParseError::mal_formee(
                format!("{n} opérandes sans opérateur pour les relier"),
                self.ouverture,
            )),
        }
    }
}

/// Jeton significatif précédent (lookback d’un seul jeton).
fn jeton_precedent(jetons: &[Jeton], i: usize) -> Option<&Jeton> {
    i.checked_sub(1).and_then(|j| jetons.get(j))
}

fn cadre_courant(cadres: &mut [Cadre]) -> Result<&mut Cadre, ParseError> {
    cadres
        .last_mut()
        .ok_or_else(|| ParseError::mal_formee("pile de cadres vide", None))
}

fn suit_une_valeur(precedent: Option<&Jeton>) -> bool {
    precedent.is_some_and(|j| j.tok.termine_valeur())
}

/// Convertit une expression infixe en suite postfixée (options par défaut).
///
/// Exemple:
///   "12-64/2"  ->  [12.0, 64.0, 2.0, /, -]
pub fn parse(expression: &str) -> Result<PostfixSequence, ParseError> {
    parse_with(expression, &Options::default())
}

/// Comme [`parse`], avec des options explicites.
pub fn parse_with(expression: &str, options: &Options) -> Result<PostfixSequence, ParseError> {
    let jetons = tokenize(expression)?;
    let resultat = to_rpn(&jetons, options);

    match &resultat {
        Ok(seq) => debug!(expression, postfixe = %seq, "analyse"),
        Err(e) => debug!(expression, erreur = %e, "analyse refusée"),
    }

    resultat
}

/// Shunting-yard sur des jetons déjà positionnés.
pub fn to_rpn(jetons: &[Jeton], options: &Options) -> Result<PostfixSequence, ParseError> {
    let mut cadres: Vec<Cadre> = vec![Cadre::default()];

    for (i, jeton) in jetons.iter().enumerate() {
        let precedent = jeton_precedent(jetons, i);
        let apres_valeur = suit_une_valeur(precedent);
        let pos = jeton.pos;

        match jeton.tok {
            Token::Number(v) => {
                if apres_valeur {
                    return Err(ParseError::mal_formee(
                        "deux opérandes consécutifs sans opérateur",
                        Some(pos),
                    ));
                }
                cadre_courant(&mut cadres)?
                    .operandes
                    .push(Operande::Nombre(v));
            }

            Token::BinaryOperator(op) => {
                let cadre = cadre_courant(&mut cadres)?;
                // signe unaire si rien de “valeur” juste avant
                if !apres_valeur {
                    match op.en_signe() {
                        Some(signe) => {
                            cadre.operateurs.push((Operator::Unary(signe), pos));
                            continue;
                        }
                        None => {
                            return Err(ParseError::mal_formee(
                                format!("opérateur '{}' sans opérande gauche", op.symbol()),
                                Some(pos),
                            ))
                        }
                    }
                }

                let nouveau = Operator::Binary(op);
                while let Some(&(sommet, _)) = cadre.operateurs.last() {
                    if sommet.priorite() >= nouveau.priorite() {
                        cadre.reduire()?;
                    } else {
                        break;
                    }
                }
                cadre.operateurs.push((nouveau, pos));
            }

            Token::UnaryOperator(op) => {
                // une fonction après une valeur serait une multiplication implicite
                if apres_valeur {
                    return Err(ParseError::mal_formee(
                        format!("fonction '{}' directement après une valeur", op.symbol()),
                        Some(pos),
                    ));
                }
                cadre_courant(&mut cadres)?
                    .operateurs
                    .push((Operator::Unary(op), pos));
            }

            Token::OpenBracket => {
                if apres_valeur {
                    return Err(ParseError::mal_formee(
                        "parenthèse ouvrante directement après une valeur",
                        Some(pos),
                    ));
                }
                // le cadre racine ne compte pas
                if cadres.len() > options.profondeur_max {
                    return Err(ParseError::NestingTooDeep {
                        limite: options.profondeur_max,
                        position: pos,
                    });
                }
                cadres.push(Cadre::ouvert_a(pos));
            }

            Token::CloseBracket => {
                if cadres.len() < 2 {
                    return Err(ParseError::UnbalancedBrackets { position: pos });
                }
                let ferme = match cadres.pop() {
                    Some(c) => c.terminer()?,
                    None => return Err(ParseError::UnbalancedBrackets { position: pos }),
                };
                if let Some(parent) = cadres.last_mut() {
                    parent.operandes.push(Operande::SousSequence(ferme));
                }
            }
        }
    }

    // parenthèses restées ouvertes : on signale la plus extérieure
    if cadres.len() > 1 {
        let position = cadres[1].ouverture.unwrap_or(0);
        return Err(ParseError::UnbalancedBrackets { position });
    }

    let racine = cadres.pop().unwrap_or_default();
    racine.terminer().map(PostfixSequence::new)
}
