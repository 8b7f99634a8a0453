//! src/app/etat.rs
//!
//! État UI (sans vue) : l’expression en cours, le résultat affiché, l’erreur
//! éventuelle et le drapeau "vient d’évaluer".
//!
//! Contrats :
//! - Aucune règle de saisie ni d’évaluation ici : tout passe par le noyau.
//! - Deux états logiques : Saisie (expression vide ou en cours) et Évalué
//!   (l’expression est le résultat précédent, `vient_d_evaluer == true`).
//!   - chiffre / point / constante en Évalué : nouveau calcul
//!   - opérateur en Évalué : on continue à partir du résultat
//!   - "=" réussi : Évalué ; "=" en erreur : reste en Saisie, erreur affichée
//!   - C : Saisie vide, depuis n’importe quel état

use log::debug;

use crate::noyau::{self, ErreurCalc, OperationUnaire};

/// Garde-fou : longueur max de l’expression saisie au clavier.
pub const LONGUEUR_MAX_ENTREE: usize = 24;

#[derive(Clone, Debug, PartialEq)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,             // aperçu / dernier résultat
    pub erreur: Option<ErreurCalc>,   // masque `resultat` tant qu’elle est là

    // --- état ---
    pub vient_d_evaluer: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: "0".to_string(),
            erreur: None,
            vient_d_evaluer: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Lecture ------------------------ */

    /// Expression espacée pour l’écran ("0" si vide).
    pub fn affichage_expression(&self) -> String {
        noyau::formater_expression(&self.expression)
    }

    /// Texte sous l’expression : le message d’erreur, sinon le résultat.
    pub fn affichage_resultat(&self) -> String {
        match self.erreur {
            Some(e) => e.to_string(),
            None => self.resultat.clone(),
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn sur_chiffre(&mut self, chiffre: &str) {
        let Some(base) = self.base_saisie() else {
            return;
        };
        let expression = noyau::ajouter_chiffre(&base, chiffre);
        self.mettre_expression(expression);
    }

    pub fn sur_point(&mut self) {
        let Some(base) = self.base_saisie() else {
            return;
        };
        let expression = noyau::ajouter_point(&base);
        self.mettre_expression(expression);
    }

    pub fn sur_operateur(&mut self, op: &str) {
        let base = if !self.expression.is_empty() {
            self.expression.clone()
        } else if self.vient_d_evaluer {
            self.resultat.clone()
        } else {
            String::new()
        };
        let expression = noyau::ajouter_operateur(&base, op);
        self.mettre_expression(expression);
    }

    /// π, e : valeur formatée insérée comme opérande.
    pub fn sur_constante(&mut self, valeur: f64) {
        let base = if self.vient_d_evaluer {
            String::new()
        } else {
            self.expression.clone()
        };
        let expression = noyau::inserer_constante(&base, &noyau::formater_nombre(valeur));
        self.mettre_expression(expression);
    }

    /// Applique une fonction à la valeur courante (expression évaluée, ou
    /// résultat si l’expression est vide / vient d’être évaluée).
    /// Le résultat est promu comme après "=".
    pub fn sur_unaire(&mut self, op: OperationUnaire) {
        let source = if self.expression.is_empty() || self.vient_d_evaluer {
            self.resultat.clone()
        } else if noyau::est_complete(&self.expression) {
            self.expression.clone()
        } else {
            return;
        };

        let issue = noyau::evaluer(&source).and_then(|v| match v {
            Some(texte) => {
                let valeur: f64 = texte.parse().map_err(|_| ErreurCalc::EntreeInvalide)?;
                noyau::appliquer_unaire(valeur, op).map(Some)
            }
            None => Ok(None),
        });

        debug!("{}({source:?}) -> {issue:?}", op.libelle());
        match issue {
            Ok(Some(v)) => self.promouvoir(v),
            Ok(None) => {}
            Err(e) => {
                self.erreur = Some(e);
                self.vient_d_evaluer = false;
            }
        }
    }

    /// ⌫ : retire le dernier caractère.
    pub fn supprimer(&mut self) {
        let expression = noyau::supprimer_dernier(&self.expression);
        self.mettre_expression(expression);
    }

    /// C : remise à zéro totale.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// "=" : évaluation finale ; en cas de succès le résultat devient la
    /// nouvelle expression (calculs enchaînés).
    pub fn sur_egal(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match noyau::evaluer(&self.expression) {
            Ok(Some(v)) => self.promouvoir(v),
            Ok(None) => {}
            Err(e) => {
                debug!("= sur {:?} : {e}", self.expression);
                self.erreur = Some(e);
                self.vient_d_evaluer = false;
            }
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Base d’une saisie de chiffre / point : vide si on vient d’évaluer.
    /// `None` si la longueur max est atteinte.
    fn base_saisie(&self) -> Option<String> {
        let base = if self.vient_d_evaluer {
            String::new()
        } else {
            self.expression.clone()
        };
        (base.chars().count() < LONGUEUR_MAX_ENTREE).then_some(base)
    }

    fn promouvoir(&mut self, valeur: String) {
        self.expression = valeur.clone();
        self.resultat = valeur;
        self.erreur = None;
        self.vient_d_evaluer = true;
    }

    /// Dépose la nouvelle expression et rafraîchit l’aperçu.
    fn mettre_expression(&mut self, expression: String) {
        self.expression = expression;
        self.vient_d_evaluer = false;

        if self.expression.is_empty() {
            self.resultat = "0".to_string();
            self.erreur = None;
            return;
        }

        if !noyau::est_complete(&self.expression) {
            self.erreur = None;
            return;
        }

        match noyau::evaluer(&self.expression) {
            Ok(Some(v)) => {
                self.resultat = v;
                self.erreur = None;
            }
            Ok(None) => self.erreur = None,
            Err(e) => self.erreur = Some(e),
        }
    }
}
