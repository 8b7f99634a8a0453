//! Propriétés observables du noyau, vues de l’appelant (suite de touches
//! -> expression -> évaluation -> promotion du résultat).

use super::*;

fn eval_ok(expr: &str) -> String {
    match evaluer(expr) {
        Ok(Some(v)) => v,
        autre => panic!("expr={expr:?} issue={autre:?}"),
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn prop_zero_de_tete() {
    assert_eq!(ajouter_chiffre(&ajouter_chiffre("", "5"), "0"), "50");
    assert_eq!(ajouter_chiffre("0", "5"), "5");
}

#[test]
fn prop_un_point_par_segment() {
    assert_eq!(ajouter_point("3."), "3.");
}

#[test]
fn prop_operateur_remplace() {
    assert_eq!(ajouter_operateur("3+", "-"), "3-");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn prop_priorite() {
    assert_eq!(evaluer("2+3×4"), Ok(Some("14".to_string())));
}

#[test]
fn prop_division_par_zero() {
    assert_eq!(evaluer("5÷0"), Err(ErreurCalc::DivisionParZero));
}

#[test]
fn prop_operateur_de_tete_vs_de_fin() {
    assert_eq!(evaluer("+5"), Err(ErreurCalc::EntreeInvalide));
    // "5+" : le reste en fin n’est pas une erreur
    assert!(evaluer("5+").is_ok());
}

#[test]
fn prop_bruit_binaire() {
    assert_eq!(evaluer("0.1+0.2"), Ok(Some("0.3".to_string())));
}

#[test]
fn prop_format_idempotent() {
    let valeurs = [
        0.0,
        3.0,
        2.5,
        -7.25,
        0.1 + 0.2,
        1.0 / 3.0,
        2.0 / 3.0,
        123.456,
        262_144.123_456_789_01,
        700_000.000_000_000_1,
        987_654_321.987_654_3,
        1e12,
        1e21,
        -1e-11,
        std::f64::consts::PI,
        std::f64::consts::E,
    ];
    for x in valeurs {
        let une_fois = formater_nombre(x);
        let relu: f64 = une_fois
            .parse()
            .unwrap_or_else(|e| panic!("{une_fois:?} illisible: {e}"));
        assert_eq!(formater_nombre(relu), une_fois, "x={x}");
    }
}

#[test]
fn prop_expression_complete_donne_une_issue() {
    // complète => jamais le neutre : une valeur OU une erreur
    for e in ["1", "2+2", "5÷0", "9^999", "1.5×4-0.5", "7-7", "3^0.5"] {
        assert!(est_complete(e), "e={e:?}");
        assert!(!matches!(evaluer(e), Ok(None)), "e={e:?}");
    }
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn enchainement_resultat_promu() {
    // 7 - 10 = -3, puis "× 2" sur le résultat promu
    let r = eval_ok("7-10");
    assert_eq!(r, "-3");
    let suite = ajouter_chiffre(&ajouter_operateur(&r, "×"), "2");
    assert_eq!(suite, "-3×2");
    assert_eq!(eval_ok(&suite), "-6");
}

#[test]
fn affichage_puis_evaluation() {
    let expr = "12.5+3×4";
    let affichee = formater_expression(expr);
    assert_eq!(affichee, "12.5 + 3 × 4");
    assert_eq!(eval_ok(&affichee), eval_ok(expr));
}

#[test]
fn constante_puis_fonction() {
    let pi = formater_nombre(std::f64::consts::PI);
    let expr = inserer_constante("2×", &pi);
    let v: f64 = eval_ok(&expr).parse().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        appliquer_unaire(v / 2.0, OperationUnaire::Racine),
        Ok("1.7724538509".to_string())
    );
}
