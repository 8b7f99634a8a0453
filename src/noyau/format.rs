// src/noyau/format.rs

use super::jetons::est_operateur;

/// Nombre de décimales conservées à l’affichage.
pub const DECIMALES: usize = 10;

/* ------------------------ Nombres ------------------------ */

/// Forme canonique d’un résultat :
/// - arrondi à 10 décimales pour gommer le bruit binaire (0.1+0.2 => 0.3) ;
///   l’arrondi se fait en décimal exact par le formateur, ce qui équivaut à
///   ×1e10, arrondi, ÷1e10 sans le double arrondi sur les grandes valeurs
/// - écriture décimale, jamais scientifique
/// - sans zéros de fin ni point final (3.0 => 3, 2.50 => 2.5)
///
/// Idempotente : `formater_nombre(parse(formater_nombre(x))) == formater_nombre(x)`.
pub fn formater_nombre(valeur: f64) -> String {
    let mut texte = format!("{valeur:.prec$}", prec = DECIMALES);

    if texte.contains('.') {
        let coupe = texte.trim_end_matches('0').trim_end_matches('.').len();
        texte.truncate(coupe);
    }

    // -0.0, ou un négatif qui s’arrondit à zéro
    if texte == "-0" {
        texte.remove(0);
    }
    texte
}

/* ------------------------ Expressions ------------------------ */

/// Expression lisible : un espace de part et d’autre de chaque opérateur.
/// Une expression vide s’affiche "0".
pub fn formater_expression(expr: &str) -> String {
    if expr.trim().is_empty() {
        return "0".to_string();
    }

    let mut espacee = String::with_capacity(expr.len() * 2);
    for c in expr.chars() {
        if est_operateur(c) {
            espacee.push(' ');
            espacee.push(c);
            espacee.push(' ');
        } else {
            espacee.push(c);
        }
    }

    espacee.split_whitespace().collect::<Vec<_>>().join(" ")
}
