use quizzical::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    let config = quizzical::config::QuizConfig::default();
    log::info!("using trivia endpoint {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quizzical",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::with_config(config)))),
    )
}

// ===== WEB ONLY =====
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "quizzical_canvas";

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            log::error!("no <canvas id=\"{CANVAS_ID}\"> in the page");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
            )
            .await;

        if let Err(err) = started {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
