#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use quiz_overlay::QuizApp;
    use quiz_overlay::config::AppConfig;

    pretty_env_logger::init();

    let config = AppConfig::parse();
    let view = config.load_view()?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.title.as_str())
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.title,
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::restore(cc, view)))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
