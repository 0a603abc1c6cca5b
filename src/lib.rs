pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::QuizApp;
pub use error::{QuizError, Result};
pub use model::{ChoiceOption, Question, Quiz, RichContent};
pub use state::QuizEvent;
pub use ui::view::QuizView;

/// Browser entry point: mounts the sample quiz on `<canvas id="quiz_canvas">`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to mount the quiz on");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("quiz_canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("missing <canvas id=\"quiz_canvas\">");
            return;
        };

        let view = match QuizView::from_json(data::SAMPLE_QUIZ) {
            Ok(view) => view,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(QuizApp::restore(cc, view)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("failed to start the quiz: {err:?}");
        }
    });
}
