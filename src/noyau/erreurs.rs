// src/noyau/erreurs.rs

use thiserror::Error;

/// Les deux seules issues d’échec du noyau.
///
/// L’éditeur ne produit jamais d’erreur (il ignore les saisies invalides) :
/// seul l’évaluateur (et les fonctions unaires) en renvoie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Expression mal formée, résultat non fini, domaine d’une fonction unaire.
    #[error("Entrée invalide")]
    EntreeInvalide,

    /// Division (ou inverse) par exactement zéro.
    #[error("Division par zéro impossible")]
    DivisionParZero,
}
