// src/noyau/unaire.rs

use num_traits::Zero;

use super::erreurs::ErreurCalc;
use super::format::formater_nombre;

/// En dessous, cos(angle) est considéré nul : tan indéfinie.
const SEUIL_COSINUS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationUnaire {
    Sinus,
    Cosinus,
    Tangente,
    Ln,
    Log10,
    Racine,
    Carre,
    Inverse,
    Pourcentage,
}

impl OperationUnaire {
    /// Libellé de la touche.
    pub fn libelle(self) -> &'static str {
        match self {
            OperationUnaire::Sinus => "sin",
            OperationUnaire::Cosinus => "cos",
            OperationUnaire::Tangente => "tan",
            OperationUnaire::Ln => "ln",
            OperationUnaire::Log10 => "log",
            OperationUnaire::Racine => "√",
            OperationUnaire::Carre => "x²",
            OperationUnaire::Inverse => "1/x",
            OperationUnaire::Pourcentage => "%",
        }
    }
}

/// Applique une fonction à une valeur et renvoie le résultat formaté.
///
/// Les angles sont en degrés. Domaines :
/// - tan : indéfinie si |cos| < 1e-12
/// - ln, log : argument > 0
/// - √ : argument ≥ 0
/// - 1/x : x ≠ 0 (sinon division par zéro)
///
/// Tout résultat non fini est une entrée invalide.
pub fn appliquer_unaire(valeur: f64, op: OperationUnaire) -> Result<String, ErreurCalc> {
    use OperationUnaire::*;

    let resultat = match op {
        Sinus => valeur.to_radians().sin(),
        Cosinus => valeur.to_radians().cos(),
        Tangente => {
            let angle = valeur.to_radians();
            if angle.cos().abs() < SEUIL_COSINUS {
                return Err(ErreurCalc::EntreeInvalide);
            }
            angle.tan()
        }
        Ln | Log10 if valeur <= 0.0 => return Err(ErreurCalc::EntreeInvalide),
        Ln => valeur.ln(),
        Log10 => valeur.log10(),
        Racine if valeur < 0.0 => return Err(ErreurCalc::EntreeInvalide),
        Racine => valeur.sqrt(),
        Carre => valeur * valeur,
        Inverse if valeur.is_zero() => return Err(ErreurCalc::DivisionParZero),
        Inverse => 1.0 / valeur,
        Pourcentage => valeur / 100.0,
    };

    if !resultat.is_finite() {
        return Err(ErreurCalc::EntreeInvalide);
    }
    Ok(formater_nombre(resultat))
}
