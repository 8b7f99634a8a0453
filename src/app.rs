// src/app.rs
//
// Calculatrice : module App (racine)
// ----------------------------------
// - Sous-modules : etat.rs (état + machine à états) et vue.rs (egui)
// - Ré-export d’AppCalc pour main.rs
// - impl eframe::App (identique natif + web)
//
// Le clavier (chiffres, opérateurs, Enter, Backspace) est lu dans vue.rs ;
// ici seulement le raccourci global ESC.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = touche "C"
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            log::debug!("ESC : effacement");
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
