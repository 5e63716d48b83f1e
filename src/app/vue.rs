// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use calculatrice_rpn::noyau::jetons::{format_nombre, format_tokens, tokenize};
use calculatrice_rpn::noyau::operateurs::noms_fonctions;
use calculatrice_rpn::noyau::rpn::to_rpn;
use calculatrice_rpn::{evaluate_postfix, ExpressionError};

use super::etat::{AppCalc, Demarche, Insertion, PROFONDEUR_MAX_UI};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (3+4)*2^2, -2+-2, sin(1)^2 + cos(1)^2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        // --- Clavier : Backspace sur un nom de fonction entier ---
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if resp.has_focus() && backspace {
            self.effacer_symbole();
        }

        ui.add_space(6.0);

        // Actions + profondeur
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface valeur + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Imbrication max :");
            let mut p = self.options.profondeur_max as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(1..=PROFONDEUR_MAX_UI as u32),
            );
            if resp.changed() {
                self.set_profondeur_max(p as usize);
            }
            if self.profondeur_est_defaut() {
                ui.weak("(défaut)");
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", Insertion::Collee);
            self.bouton_insert(ui, ")", ")", Insertion::Fermante);

            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, op, Insertion::Operateur);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.horizontal_wrapped(|ui| {
            for f in noms_fonctions() {
                self.bouton_insert(ui, f, &format!("{f}("), Insertion::Collee);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[&str; 3]; 4] = [
            ["7", "8", "9"],
            ["4", "5", "6"],
            ["1", "2", "3"],
            ["0", ".", ""],
        ];

        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, ligne) in LIGNES.iter().enumerate() {
                    for touche in ligne {
                        if touche.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche, touche, Insertion::Collee);
                        }
                    }
                    if i == 0 {
                        let tip = "Efface le dernier symbole";
                        self.bouton_action(ui, "DEL", tip, Action::Backspace);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Valeur :");
        if self.valeur_dispo {
            Self::champ_monospace(ui, "valeur_out", &self.valeur, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.effacer_symbole(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, fragment: &str, mode: Insertion) {
        if ui.add_sized([46.0, 28.0], egui::Button::new(label)).clicked() {
            self.inserer(fragment, mode);
        }
    }

    /// Évalue l’entrée : jetons -> RPN -> valeur, puis dépose le tout dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let mut demarche = Demarche::default();

        let resultat = (|| -> Result<f64, ExpressionError> {
            let jetons = tokenize(&self.entree)?;
            demarche.jetons = format_tokens(&jetons);

            let rpn = to_rpn(&jetons, &self.options)?;
            demarche.rpn = rpn.to_string();

            Ok(evaluate_postfix(&rpn)?)
        })();

        match resultat {
            Ok(v) => {
                tracing::info!(entree = %self.entree, valeur = v, "évalué");
                self.set_resultats(format_nombre(v), demarche);
            }
            Err(e) => {
                tracing::info!(entree = %self.entree, erreur = %e, "refusé");
                self.set_erreur(e.to_string(), demarche);
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
