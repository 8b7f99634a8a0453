//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! On tape des suites de touches aléatoires (RNG à graine fixe) et on vérifie
//! à chaque pas :
//! - les invariants de l’expression (pas deux opérateurs de suite, au plus un
//!   point par segment, pas de "0" suivi d’un chiffre en tête de segment)
//! - l’évaluation rend toujours une issue, sans paniquer
//! - une expression complète ne rend jamais le neutre
//! - toute valeur rendue est déjà sous forme canonique

use std::time::{Duration, Instant};

use super::jetons::est_operateur;
use super::*;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG (Knuth MMIX)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const OPERATEURS: [&str; 5] = ["+", "-", "×", "÷", "^"];

fn appuyer(rng: &mut Rng, expr: &str) -> String {
    match rng.pick(20) {
        0..=9 => ajouter_chiffre(expr, CHIFFRES[rng.pick(10) as usize]),
        10..=11 => ajouter_point(expr),
        12..=16 => ajouter_operateur(expr, OPERATEURS[rng.pick(5) as usize]),
        17 => supprimer_dernier(expr),
        18 => inserer_constante(expr, &formater_nombre(std::f64::consts::E)),
        // touches parasites : doivent être ignorées
        _ => match rng.pick(3) {
            0 => ajouter_chiffre(expr, "x"),
            1 => ajouter_operateur(expr, "*"),
            _ => ajouter_chiffre(expr, "12"),
        },
    }
}

fn verifier_invariants(expr: &str) {
    let chars: Vec<char> = expr.chars().collect();

    assert!(
        !chars.first().is_some_and(|c| est_operateur(*c)),
        "opérateur de tête: {expr:?}"
    );
    for w in chars.windows(2) {
        assert!(
            !(est_operateur(w[0]) && est_operateur(w[1])),
            "deux opérateurs de suite: {expr:?}"
        );
    }
    for segment in expr.split(est_operateur) {
        assert!(
            segment.matches('.').count() <= 1,
            "deux points dans un segment: {expr:?}"
        );
        let mut it = segment.chars();
        if let (Some('0'), Some(c)) = (it.next(), it.next()) {
            assert!(!c.is_ascii_digit(), "zéro de tête: {expr:?}");
        }
    }
}

fn verifier_evaluation(expr: &str) {
    match evaluer(expr) {
        Ok(Some(v)) => {
            let relu: f64 = v
                .parse()
                .unwrap_or_else(|e| panic!("valeur illisible {v:?} pour {expr:?}: {e}"));
            assert_eq!(formater_nombre(relu), v, "non canonique pour {expr:?}");
        }
        Ok(None) => assert!(!est_complete(expr), "neutre pour complète: {expr:?}"),
        Err(_) => {}
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_saisie_et_evaluation() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE);
    for _session in 0..400 {
        let mut expr = String::new();
        for _touche in 0..30 {
            expr = appuyer(&mut rng, &expr);
            verifier_invariants(&expr);
            verifier_evaluation(&expr);
        }
        budget(start, max);
    }
}

#[test]
fn fuzz_chaines_arbitraires_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    // alphabet volontairement hostile (ASCII * /, lettres, espaces, multi-octets)
    let alphabet: Vec<char> = "0123456789..+-×÷^*/ aπ√é".chars().collect();
    let mut rng = Rng::new(42);

    for _ in 0..3000 {
        let n = rng.pick(16) as usize;
        let s: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // aucune panique, issue unique
        let _ = evaluer(&s);
        let _ = formater_expression(&s);
        let _ = supprimer_dernier(&s);
        budget(start, max);
    }
}

#[test]
fn fuzz_unaire_sur_resultats() {
    let mut rng = Rng::new(7);
    let ops = [
        OperationUnaire::Sinus,
        OperationUnaire::Cosinus,
        OperationUnaire::Tangente,
        OperationUnaire::Ln,
        OperationUnaire::Log10,
        OperationUnaire::Racine,
        OperationUnaire::Carre,
        OperationUnaire::Inverse,
        OperationUnaire::Pourcentage,
    ];

    for _ in 0..2000 {
        let v = (rng.pick(2_000_001) as f64 - 1_000_000.0) / (1 + rng.pick(1000)) as f64;
        let op = ops[rng.pick(ops.len() as u32) as usize];
        if let Ok(s) = appliquer_unaire(v, op) {
            let relu: f64 = s.parse().unwrap_or_else(|e| panic!("{s:?}: {e}"));
            assert!(relu.is_finite(), "{}({v}) = {s:?}", op.libelle());
        }
    }
}
