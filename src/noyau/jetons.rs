// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

/// Opérateurs binaires reconnus, avec leur glyphe d’affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois, // ×
    Divise, // ÷
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' => Some(Operateur::Fois),
            '÷' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    /// Un opérateur = exactement un glyphe de l’ensemble.
    pub fn depuis_str(s: &str) -> Option<Self> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Self::depuis_char(c),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Puissance => '^',
        }
    }
}

pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

impl Jeton {
    pub fn nombre(self) -> Option<f64> {
        match self {
            Jeton::Nombre(v) => Some(v),
            Jeton::Op(_) => None,
        }
    }
}

/// Découpe une expression en jetons, de gauche à droite.
///
/// - nombre : la plus longue suite de chiffres contenant au plus un point
///   (`12`, `3.`, `.5`, `0.25`)
/// - opérateur : un glyphe de `+ - × ÷ ^`
/// - tout autre caractère est ignoré (aucun jeton) ; c’est la vérification
///   de structure de l’évaluateur qui rejette une entrée mal formée.
///
/// Seul un littéral illisible ou trop grand pour un f64 fini échoue.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));

        if debut_nombre {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let v: f64 = texte.parse().map_err(|_| ErreurCalc::EntreeInvalide)?;
            if !v.is_finite() {
                return Err(ErreurCalc::EntreeInvalide);
            }
            out.push(Jeton::Nombre(v));
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Op(op));
        }
        i += 1;
    }

    Ok(out)
}

/// Liste de jetons en texte (traces de debug).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(v) => v.to_string(),
            Jeton::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
