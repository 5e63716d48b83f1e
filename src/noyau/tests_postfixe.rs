//! Batterie historique : parse() -> rendu canonique, puis valeurs.
//!
//! Les cas 1–35 reprennent la campagne console d’origine (même numérotation).

use super::erreurs::ParseError;
use super::{evaluate_postfix, parse, parse_and_evaluate};

fn assert_rpn(expr: &str, attendu: &str) {
    let r = parse(expr)
        .unwrap_or_else(|e| panic!("parse({expr:?}) erreur: {e}"))
        .to_string();
    assert_eq!(r, attendu, "expr={expr:?}");
}

fn assert_val(expr: &str, attendu: f64) {
    let v = parse_and_evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?}: {v} != {attendu}"
    );
}

fn assert_mal_formee(expr: &str) {
    match parse(expr) {
        Err(ParseError::MalformedExpression { .. }) => {}
        autre => panic!("expr={expr:?}: attendu MalformedExpression, obtenu {autre:?}"),
    }
}

/* ------------------------ Opérations de base (1–5) ------------------------ */

#[test]
fn cas_01_05_operations_de_base() {
    assert_rpn("5+2", "[5.0, 2.0, +]");
    assert_rpn("5-2", "[5.0, 2.0, -]");
    assert_rpn("5*2", "[5.0, 2.0, *]");
    assert_rpn("5/2", "[5.0, 2.0, /]");
    assert_rpn("5^2", "[5.0, 2.0, ^]");
}

/* ------------------------ Espaces, décimaux, bornes (6–11) ------------------------ */

#[test]
fn cas_06_espaces() {
    assert_rpn("  5 +   2  ", "[5.0, 2.0, +]");
    assert_eq!(parse("  5 +   2  "), parse("5+2"));
    assert_val("  5 +   2  ", 7.0);
}

#[test]
fn cas_07_decimaux() {
    assert_rpn("2.456+1.233", "[2.456, 1.233, +]");
}

#[test]
fn cas_08_09_nombre_seul() {
    assert_rpn("3  ", "[3.0]");
    assert_rpn("3.43", "[3.43]");
    assert_val("3.43", 3.43);
}

#[test]
fn cas_10_11_expression_vide() {
    assert_rpn("", "[0.0]");
    assert_rpn("   ", "[0.0]");
    assert_val("", 0.0);
    assert_val("   ", 0.0);
}

/* ------------------------ Négatifs (12–15) ------------------------ */

#[test]
fn cas_12_15_negatifs() {
    assert_rpn("-2", "[2.0, --]");
    assert_val("-2", -2.0);

    assert_rpn("2+-2", "[2.0, 2.0, --, +]");
    assert_val("2+-2", 0.0);

    assert_rpn("-2+2", "[2.0, --, 2.0, +]");
    assert_val("-2+2", 0.0);

    assert_rpn("-2+-2", "[2.0, --, 2.0, --, +]");
    assert_val("-2+-2", -4.0);
}

/* ------------------------ Plusieurs opérateurs (16–23) ------------------------ */

#[test]
fn cas_16_23_priorites() {
    assert_rpn("2+4+5+6", "[2.0, 4.0, +, 5.0, +, 6.0, +]");
    assert_rpn("64/2/16", "[64.0, 2.0, /, 16.0, /]");
    assert_rpn("64/2-12", "[64.0, 2.0, /, 12.0, -]");
    assert_rpn("12-64/2", "[12.0, 64.0, 2.0, /, -]");
    assert_rpn("12/4-64/2", "[12.0, 4.0, /, 64.0, 2.0, /, -]");
    assert_rpn("2^4/2", "[2.0, 4.0, ^, 2.0, /]");
    assert_rpn("2^4/2-3", "[2.0, 4.0, ^, 2.0, /, 3.0, -]");
    assert_rpn("3-2/4^2", "[3.0, 2.0, 4.0, 2.0, ^, /, -]");

    assert_val("64/2/16", 2.0);
    assert_val("12-64/2", -20.0);
    assert_val("12/4-64/2", -29.0);
    assert_val("2^4/2-3", 5.0);
    assert_val("3-2/4^2", 2.875);
}

/* ------------------------ Parenthèses (24–29) ------------------------ */

#[test]
fn cas_24_27_parentheses() {
    assert_rpn("(6-2)/4", "[6.0, 2.0, -, 4.0, /]");
    assert_rpn("4/(6-2)", "[4.0, 6.0, 2.0, -, /]");
    assert_rpn("(6+6)/(6-2)", "[6.0, 6.0, +, 6.0, 2.0, -, /]");
    assert_rpn("((6-2))", "[6.0, 2.0, -]");

    assert_val("(6-2)/4", 1.0);
    assert_val("4/(6-2)", 1.0);
    assert_val("(6+6)/(6-2)", 3.0);
    assert_val("((6-2))", 4.0);
}

#[test]
fn cas_28_composite() {
    assert_rpn(
        "2+3*32/64^(1/2)-18*2",
        "[2.0, 3.0, 32.0, *, 64.0, 1.0, 2.0, /, ^, /, +, 18.0, 2.0, *, -]",
    );
    // 2 + 96/8 - 36
    assert_val("2+3*32/64^(1/2)-18*2", -22.0);
}

#[test]
fn cas_29_imbrique() {
    // sans parenthèses externes, ^ ne porte que sur le diviseur ((24+6)/10)
    assert_rpn(
        "(3*(12+2-8))/((24+6)/10)^(1/3)",
        "[3.0, 12.0, 2.0, +, 8.0, -, *, 24.0, 6.0, +, 10.0, /, 1.0, 3.0, /, ^, /]",
    );
    // 18 / 3^(1/3)
    assert_val("(3*(12+2-8))/((24+6)/10)^(1/3)", 18.0 / 3.0_f64.powf(1.0 / 3.0));
}

#[test]
fn cas_29_quotient_entier_a_la_puissance() {
    // ((3*6)/3)^(1/3) : la puissance s’applique au quotient parenthésé
    assert_rpn(
        "((3*(12+2-8))/((24+6)/10))^(1/3)",
        "[3.0, 12.0, 2.0, +, 8.0, -, *, 24.0, 6.0, +, 10.0, /, /, 1.0, 3.0, /, ^]",
    );
    assert_val("((3*(12+2-8))/((24+6)/10))^(1/3)", 6.0_f64.powf(1.0 / 3.0));
}

/* ------------------------ Erreurs (30–35) ------------------------ */

#[test]
fn cas_30_deux_operandes_consecutifs() {
    assert_mal_formee("2 2+8");
}

#[test]
fn cas_31_operateur_final() {
    assert_mal_formee("2+8+");
}

#[test]
fn cas_32_33_parentheses_desequilibrees() {
    assert!(matches!(
        parse("(2+4"),
        Err(ParseError::UnbalancedBrackets { position: 0 })
    ));
    assert!(matches!(
        parse("2+4)"),
        Err(ParseError::UnbalancedBrackets { position: 3 })
    ));
}

#[test]
fn cas_34_operande_en_trop() {
    assert_mal_formee("2 2+");
}

#[test]
fn cas_35_signe_apres_operateur() {
    // le second '+' est un signe unaire : 2 + (+4)
    assert_rpn("2++4", "[2.0, 4.0, ++, +]");
    assert_val("2++4", 6.0);
}

#[test]
fn caractere_invalide() {
    assert_eq!(
        parse("2&3"),
        Err(ParseError::InvalidToken {
            caractere: '&',
            position: 1
        })
    );
}

#[test]
fn nombre_mal_forme() {
    assert!(matches!(
        parse("2.3.4 + 1"),
        Err(ParseError::MalformedNumber { position: 0, .. })
    ));
}

/* ------------------------ Aller-retour parse -> évaluation ------------------------ */

#[test]
fn suites_produites_toujours_evaluables() {
    for expr in [
        "5+2",
        "-(-(-1))",
        "2^-2",
        "sin(1)^2 + cos(1)^2",
        "((((1))))",
        "1 - -1 - - 1",
        "arctan(1/0)",
        "()",
        "-(2+3)*4",
    ] {
        let seq = parse(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            evaluate_postfix(&seq).is_ok(),
            "expr={expr:?} rpn={seq}"
        );
    }
}

#[test]
fn valeurs_diverses() {
    assert_val("2^3^2", 64.0);
    assert_val("-2^2", 4.0);
    assert_val("-(2^2)", -4.0);
    assert_val("2*-3", -6.0);
    assert_val("1 - -1 - - 1", 3.0);
    assert_val("sin(1)^2 + cos(1)^2", 1.0);
    assert_val("arctan(1/0)", std::f64::consts::FRAC_PI_2);
}
