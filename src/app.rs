// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// - etat.rs : état pur (entrée, valeur, démarche, options)
// - vue.rs  : widgets egui + appel du noyau
// - ici     : impl eframe::App (natif + web) et raccourcis globaux

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis globaux seulement (Enter/Backspace : voir vue.rs, quand le champ a le focus).
        // ESC = C, Ctrl+ESC = AC
        let (esc, ctrl) = ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.modifiers.ctrl));
        if esc && ctrl {
            self.reset_total();
        } else if esc {
            self.clear_entree();
        }

        egui::TopBottomPanel::bottom("barre_etat").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("priorités : unaires > ^ > * / > + -");
                ui.separator();
                ui.small(format!(
                    "imbrication max : {}",
                    self.options.profondeur_max
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
