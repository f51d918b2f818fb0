// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (quand l’écran a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use calculatrice_infixe::app::AppCalc;`
pub use etat::{AppCalc, Notification};

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = "C" (écran seulement), sauf si une notification est ouverte : elle la ferme.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.notification.is_some() {
                self.fermer_notification();
            } else {
                self.effacer();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        self.ui_notification(ctx);
    }
}
