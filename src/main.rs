// src/main.rs
//
// Calculatrice flottante — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// - NATIF : sans argument -> UI eframe ; --expr -> une évaluation ; --console -> boucle ligne à ligne
// - WEB   : eframe::WebRunner sur <canvas id="the_canvas_id">
//
// Traces : RUST_LOG (ex: RUST_LOG=calculatrice_flottante=trace), sur stderr.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice flottante";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::{self, IsTerminal};

    use anyhow::anyhow;
    use clap::Parser;
    use tracing::info;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use calculatrice_flottante::console::{self, OptionsConsole};
    use calculatrice_flottante::noyau::format::DIGITS_MAX;
    use calculatrice_flottante::{evaluate, format_resultat};

    use super::{egui, AppCalc, TITRE_APP};

    #[derive(Parser, Debug)]
    #[command(version, about = "Évalue des expressions arithmétiques (f64)", long_about = None)]
    pub struct Args {
        /// Évalue une seule expression puis quitte (code 1 en cas d’erreur)
        #[arg(short, long, conflicts_with = "console")]
        expr: Option<String>,

        /// Boucle ligne à ligne sur l’entrée standard ('exit' ou 'end' pour quitter)
        #[arg(short, long)]
        console: bool,

        /// Nombre fixe de décimales à l’affichage (écriture la plus courte sinon)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=DIGITS_MAX as i64))]
        digits: Option<u8>,
    }

    fn init_traces() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }

    fn lance_ui() -> anyhow::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([520.0, 640.0])
                .with_min_inner_size([420.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
        .map_err(|e| anyhow!("interface graphique : {e}"))
    }

    pub fn main() -> anyhow::Result<()> {
        init_traces();
        let args = Args::parse();
        let digits = args.digits.map(usize::from);

        if let Some(expr) = args.expr.as_deref() {
            match evaluate(expr) {
                Ok(v) => {
                    println!("{}", format_resultat(v, digits));
                    return Ok(());
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        if args.console {
            let stdin = io::stdin();
            let options = OptionsConsole {
                digits,
                banniere: stdin.is_terminal(),
            };
            let n = console::boucle(stdin.lock(), io::stdout().lock(), &options)?;
            info!(evaluations = n, "console terminée");
            return Ok(());
        }

        lance_ui()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::main()
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

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
