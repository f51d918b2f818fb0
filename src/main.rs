// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou `--eval "<expr>"` sans fenêtre
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

use calculatrice_infixe::app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fichier de configuration JSON
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Évalue une expression sans ouvrir de fenêtre
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Traces détaillées (niveau debug)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_traces(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filtre = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stderr : stdout reste réservé au résultat de `--eval`
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/// Mode ligne de commande : "<expression normalisée> = <résultat>" sur stdout,
/// ou l’erreur sur stderr (code de sortie 1).
#[cfg(not(target_arch = "wasm32"))]
fn evaluer_en_ligne(
    expr: &str,
    config: &calculatrice_infixe::config::ConfigCalc,
) -> std::process::ExitCode {
    match calculatrice_infixe::noyau::ligne_resultat(expr, config) {
        Ok(ligne) => {
            println!("{ligne}");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Erreur: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let cli = Cli::parse();
    init_traces(cli.verbose);

    let config = match calculatrice_infixe::config::charger(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Erreur: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Some(expr) = cli.eval.as_deref() {
        return evaluer_en_ligne(expr, &config);
    }

    tracing::info!("démarrage de l’interface");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 560.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    let lancement = eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_config(config)))),
    );

    match lancement {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "fenêtre impossible à ouvrir");
            std::process::ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // Pas de fichier de configuration côté web : valeurs par défaut.
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
