// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Écran : expression espacée + résultat (ou erreur, en couleur d’erreur)
// - Rangées scientifiques : sin cos tan ln / log √ x² ^ / π e % 1/x
// - Pavé : C ⌫ ÷ × / 7 8 9 - / 4 5 6 + / 1 2 3 = / 0 .
// - Clavier physique : chiffres, . ou , , + - ^, * et / (mappés sur × ÷),
//   Enter ou = évalue, Backspace supprime (Escape : voir app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::OperationUnaire;

const TAILLE_TOUCHE: [f32; 2] = [72.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.lire_clavier(ui);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_scientifique(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage_expression())
                            .monospace()
                            .size(22.0),
                    );

                    let texte = egui::RichText::new(self.affichage_resultat()).size(30.0);
                    if self.erreur.is_some() {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte.strong());
                    }
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("rangees_scientifiques")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_unaire(ui, OperationUnaire::Sinus);
                self.bouton_unaire(ui, OperationUnaire::Cosinus);
                self.bouton_unaire(ui, OperationUnaire::Tangente);
                self.bouton_unaire(ui, OperationUnaire::Ln);
                ui.end_row();

                self.bouton_unaire(ui, OperationUnaire::Log10);
                self.bouton_unaire(ui, OperationUnaire::Racine);
                self.bouton_unaire(ui, OperationUnaire::Carre);
                self.bouton(ui, "^", Action::Operateur("^"));
                ui.end_row();

                self.bouton(ui, "π", Action::Constante(std::f64::consts::PI));
                self.bouton(ui, "e", Action::Constante(std::f64::consts::E));
                self.bouton_unaire(ui, OperationUnaire::Pourcentage);
                self.bouton_unaire(ui, OperationUnaire::Inverse);
                ui.end_row();
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Action::Effacer);
                self.bouton(ui, "⌫", Action::Supprimer);
                self.bouton(ui, "÷", Action::Operateur("÷"));
                self.bouton(ui, "×", Action::Operateur("×"));
                ui.end_row();

                self.bouton(ui, "7", Action::Chiffre("7"));
                self.bouton(ui, "8", Action::Chiffre("8"));
                self.bouton(ui, "9", Action::Chiffre("9"));
                self.bouton(ui, "-", Action::Operateur("-"));
                ui.end_row();

                self.bouton(ui, "4", Action::Chiffre("4"));
                self.bouton(ui, "5", Action::Chiffre("5"));
                self.bouton(ui, "6", Action::Chiffre("6"));
                self.bouton(ui, "+", Action::Operateur("+"));
                ui.end_row();

                self.bouton(ui, "1", Action::Chiffre("1"));
                self.bouton(ui, "2", Action::Chiffre("2"));
                self.bouton(ui, "3", Action::Chiffre("3"));
                self.bouton(ui, "=", Action::Egal);
                ui.end_row();

                self.bouton(ui, "0", Action::Chiffre("0"));
                self.bouton(ui, ".", Action::Point);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, action: Action) {
        let resp = ui.add_sized(
            TAILLE_TOUCHE,
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if resp.clicked() {
            self.executer(action);
        }
    }

    fn bouton_unaire(&mut self, ui: &mut egui::Ui, op: OperationUnaire) {
        self.bouton(ui, op.libelle(), Action::Unaire(op));
    }

    /// Clavier physique. Le texte tapé arrive en `Event::Text` (dispo aussi
    /// sur le web) ; Enter / Backspace en touches.
    fn lire_clavier(&mut self, ui: &egui::Ui) {
        let (textes, enter, backspace) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for c in textes.iter().flat_map(|t| t.chars()) {
            if let Some(action) = action_clavier(c) {
                self.executer(action);
            }
        }
        if enter {
            self.executer(Action::Egal);
        }
        if backspace {
            self.executer(Action::Supprimer);
        }
    }

    fn executer(&mut self, action: Action) {
        log::debug!("action: {action:?}");
        match action {
            Action::Chiffre(d) => self.sur_chiffre(d),
            Action::Point => self.sur_point(),
            Action::Operateur(op) => self.sur_operateur(op),
            Action::Constante(v) => self.sur_constante(v),
            Action::Unaire(op) => self.sur_unaire(op),
            Action::Supprimer => self.supprimer(),
            Action::Effacer => self.effacer(),
            Action::Egal => self.sur_egal(),
        }
    }
}

/// Caractère tapé -> action (les glyphes × ÷ ont leurs alias ASCII).
fn action_clavier(c: char) -> Option<Action> {
    const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    let action = match c {
        '0'..='9' => Action::Chiffre(CHIFFRES[c as usize - '0' as usize]),
        '.' | ',' => Action::Point,
        '+' => Action::Operateur("+"),
        '-' => Action::Operateur("-"),
        '*' | '×' | 'x' => Action::Operateur("×"),
        '/' | '÷' => Action::Operateur("÷"),
        '^' => Action::Operateur("^"),
        '=' => Action::Egal,
        _ => return None,
    };
    Some(action)
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Chiffre(&'static str),
    Point,
    Operateur(&'static str),
    Constante(f64),
    Unaire(OperationUnaire),
    Supprimer,
    Effacer,
    Egal,
}
