//! Noyau : évaluation
//!
//! nettoyage -> jetons -> structure -> passe ^ -> passe × ÷ -> passe + - -> format
//!
//! Trois niveaux de priorité, tous associatifs à gauche, sans parenthèses :
//! une passe par niveau suffit. Ajouter des parenthèses (ou un moins unaire
//! au milieu d’une expression) demanderait un vrai analyseur par priorités.

use log::debug;
use num_traits::Zero;

use super::erreurs::ErreurCalc;
use super::format::formater_nombre;
use super::jetons::{est_operateur, format_jetons, tokenize, Jeton, Operateur};

/// API publique : évalue une expression (complète ou en cours de saisie).
///
/// - `Ok(Some(v))` : valeur formatée
/// - `Ok(None)`    : rien à afficher encore (vide, ou seulement un reste
///   d’opérateurs / de point) ; ce n’est pas une erreur
/// - `Err(e)`      : entrée invalide ou division par zéro
pub fn evaluer(expr: &str) -> Result<Option<String>, ErreurCalc> {
    let s = nettoyer(expr);
    if s.is_empty() {
        return Ok(None);
    }

    let issue = evaluer_nettoyee(s);
    debug!("évaluation: {expr:?} -> {issue:?}");
    issue.map(|v| Some(formater_nombre(v)))
}

/// Retire les opérateurs et points en fin de saisie ("5+" => "5", "3." => "3").
fn nettoyer(expr: &str) -> &str {
    expr.trim()
        .trim_end_matches(|c: char| est_operateur(c) || c == '.' || c.is_whitespace())
}

fn evaluer_nettoyee(s: &str) -> Result<f64, ErreurCalc> {
    let mut jetons = tokenize(s)?;
    plier_moins_de_tete(&mut jetons);
    debug!("jetons: {}", format_jetons(&jetons));

    // 1) Structure : premier et dernier jetons numériques
    match (jetons.first(), jetons.last()) {
        (Some(Jeton::Nombre(_)), Some(Jeton::Nombre(_))) => {}
        _ => return Err(ErreurCalc::EntreeInvalide),
    }

    // 2) ^
    let jetons = replier(&jetons, &[Operateur::Puissance], |_, a, b| {
        let v = a.powf(b);
        if v.is_finite() {
            Ok(v)
        } else {
            Err(ErreurCalc::EntreeInvalide)
        }
    })?;

    // 3) × ÷
    let jetons = replier(
        &jetons,
        &[Operateur::Fois, Operateur::Divise],
        |op, a, b| {
            if op == Operateur::Divise && b.is_zero() {
                return Err(ErreurCalc::DivisionParZero);
            }
            let v = if op == Operateur::Fois { a * b } else { a / b };
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ErreurCalc::EntreeInvalide)
            }
        },
    )?;

    // 4) + -
    additionner(&jetons)
}

/// Un seul "-" en tête devient le signe du premier nombre ("-5+3").
/// Tout autre opérateur de tête est laissé tel quel (rejeté par la structure).
fn plier_moins_de_tete(jetons: &mut Vec<Jeton>) {
    if let [Jeton::Op(Operateur::Moins), Jeton::Nombre(v), ..] = jetons[..] {
        jetons[1] = Jeton::Nombre(-v);
        jetons.remove(0);
    }
}

/// Passe gauche -> droite : remplace chaque `a op b` (op ∈ `ops`) par `f(op, a, b)`.
/// Les deux opérandes doivent être des nombres.
fn replier<F>(jetons: &[Jeton], ops: &[Operateur], f: F) -> Result<Vec<Jeton>, ErreurCalc>
where
    F: Fn(Operateur, f64, f64) -> Result<f64, ErreurCalc>,
{
    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut i: usize = 0;

    while i < jetons.len() {
        match jetons[i] {
            Jeton::Op(op) if ops.contains(&op) => {
                let a = sortie.pop().and_then(Jeton::nombre);
                let b = jetons.get(i + 1).copied().and_then(Jeton::nombre);
                let (Some(a), Some(b)) = (a, b) else {
                    return Err(ErreurCalc::EntreeInvalide);
                };
                sortie.push(Jeton::Nombre(f(op, a, b)?));
                i += 2;
            }
            j => {
                sortie.push(j);
                i += 1;
            }
        }
    }

    Ok(sortie)
}

/// Dernière passe : il ne doit rester que `n (± n)*`.
fn additionner(jetons: &[Jeton]) -> Result<f64, ErreurCalc> {
    let (premier, reste) = jetons.split_first().ok_or(ErreurCalc::EntreeInvalide)?;
    let mut total = premier.nombre().ok_or(ErreurCalc::EntreeInvalide)?;

    for paire in reste.chunks(2) {
        let [Jeton::Op(op), Jeton::Nombre(v)] = paire else {
            return Err(ErreurCalc::EntreeInvalide);
        };
        match op {
            Operateur::Plus => total += v,
            Operateur::Moins => total -= v,
            _ => return Err(ErreurCalc::EntreeInvalide),
        }
    }

    if total.is_finite() {
        Ok(total)
    } else {
        Err(ErreurCalc::EntreeInvalide)
    }
}
