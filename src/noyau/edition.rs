// src/noyau/edition.rs
//
// Éditeur : règles de saisie incrémentale.
// Toutes les fonctions sont totales : une saisie invalide rend l’expression
// inchangée, jamais d’erreur.
//
// Invariants maintenus sur l’expression :
// - jamais deux opérateurs de suite (le nouveau remplace l’ancien)
// - au plus un point par segment (segment = texte après le dernier opérateur)
// - pas de zéro de tête dans un segment ("007" impossible)

use super::jetons::{est_operateur, Operateur};

/// Segment courant : texte après le dernier opérateur (ou toute l’expression).
fn segment_courant(expr: &str) -> &str {
    expr.rsplit(est_operateur).next().unwrap_or("")
}

fn finit_par_operateur(expr: &str) -> bool {
    expr.chars().next_back().is_some_and(est_operateur)
}

/// Ajoute un chiffre (un seul caractère 0-9, sinon rien).
/// Un segment réduit à "0" est remplacé par le chiffre.
pub fn ajouter_chiffre(expr: &str, chiffre: &str) -> String {
    let mut it = chiffre.chars();
    let c = match (it.next(), it.next()) {
        (Some(c), None) if c.is_ascii_digit() => c,
        _ => return expr.to_string(),
    };

    let mut out = expr.to_string();
    if segment_courant(expr) == "0" {
        out.pop();
    }
    out.push(c);
    out
}

/// Ajoute un point décimal, au plus un par segment.
/// En début de segment, on écrit "0." (jamais ".5").
pub fn ajouter_point(expr: &str) -> String {
    if segment_courant(expr).contains('.') {
        return expr.to_string();
    }

    let mut out = expr.to_string();
    if expr.is_empty() || finit_par_operateur(expr) {
        out.push_str("0.");
    } else {
        out.push('.');
    }
    out
}

/// Ajoute un opérateur binaire.
/// - expression vide : rien (pas d’opérateur de tête)
/// - déjà un opérateur en fin : il est remplacé
pub fn ajouter_operateur(expr: &str, op: &str) -> String {
    let Some(op) = Operateur::depuis_str(op) else {
        return expr.to_string();
    };
    if expr.is_empty() {
        return String::new();
    }

    let mut out = expr.to_string();
    if finit_par_operateur(expr) {
        out.pop();
    }
    out.push(op.symbole());
    out
}

/// Insère une constante déjà formatée (π, e).
/// Après un opérateur elle devient l’opérande ; sinon elle démarre un
/// nouveau calcul.
pub fn inserer_constante(expr: &str, valeur_formatee: &str) -> String {
    if finit_par_operateur(expr) {
        format!("{expr}{valeur_formatee}")
    } else {
        valeur_formatee.to_string()
    }
}

pub fn supprimer_dernier(expr: &str) -> String {
    let mut out = expr.to_string();
    out.pop();
    out
}

/// Complète = évaluable pour l’aperçu : non vide, ne finit ni par un
/// opérateur ni par un point.
pub fn est_complete(expr: &str) -> bool {
    match expr.chars().next_back() {
        None => false,
        Some(c) => !est_operateur(c) && c != '.',
    }
}
