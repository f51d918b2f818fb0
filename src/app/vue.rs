// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand l’écran a le focus)
// - Tactile : pavé 4×5, focus redonné après clic (focus_entree)
// - Erreur : fenêtre modale, fermée par "OK"
//
// Toute la logique des touches vit dans etat.rs ; ici on ne fait que dessiner
// et router les clics.

use eframe::egui;

use super::etat::AppCalc;

/// Disposition du pavé (ligne par ligne).
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Symbole("("),
        Touche::Symbole(")"),
        Touche::Effacer,
        Touche::RetourArriere,
    ],
    [
        Touche::Symbole("7"),
        Touche::Symbole("8"),
        Touche::Symbole("9"),
        Touche::Symbole("/"),
    ],
    [
        Touche::Symbole("4"),
        Touche::Symbole("5"),
        Touche::Symbole("6"),
        Touche::Symbole("*"),
    ],
    [
        Touche::Symbole("1"),
        Touche::Symbole("2"),
        Touche::Symbole("3"),
        Touche::Symbole("-"),
    ],
    [
        Touche::Symbole("0"),
        Touche::Symbole("."),
        Touche::Egal,
        Touche::Symbole("+"),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("ecran_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(touche.label()));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Symbole(s) => self.saisir(s),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Egal => self.evaluer(),
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(&self.resultat);
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(&self.demarche.jetons);
                ui.add_space(4.0);
                ui.label("RPN :");
                ui.monospace(&self.demarche.postfixe);
            });
    }

    /// Fenêtre d’erreur (équivalent d’une alerte) : bloque jusqu’à "OK".
    pub fn ui_notification(&mut self, ctx: &egui::Context) {
        let Some(notif) = self.notification.clone() else {
            return;
        };

        egui::Window::new(notif.titre())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, notif.message);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    self.fermer_notification();
                }
            });
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Symbole(&'static str),
    Effacer,
    RetourArriere,
    Egal,
}

impl Touche {
    fn label(self) -> &'static str {
        match self {
            Touche::Symbole(s) => s,
            Touche::Effacer => "C",
            Touche::RetourArriere => "DEL",
            Touche::Egal => "=",
        }
    }
}
