//! Noyau de la calculatrice (pur : aucune E/S, aucun état partagé)
//!
//! Organisation interne :
//! - erreurs.rs : les deux erreurs possibles (entrée invalide, division par zéro)
//! - jetons.rs  : opérateurs + tokenisation
//! - format.rs  : forme canonique des nombres + affichage espacé des expressions
//! - edition.rs : règles de saisie incrémentale (chiffre, point, opérateur…)
//! - eval.rs    : évaluation par passes de priorité
//! - unaire.rs  : fonctions à un argument (sin, ln, √, 1/x…)

pub mod edition;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod unaire;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use edition::{
    ajouter_chiffre, ajouter_operateur, ajouter_point, est_complete, inserer_constante,
    supprimer_dernier,
};
pub use erreurs::ErreurCalc;
pub use eval::evaluer;
pub use format::{formater_expression, formater_nombre};
pub use unaire::{appliquer_unaire, OperationUnaire};
