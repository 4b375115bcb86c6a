use eframe::egui;
use rusty_ro5::app::RustyRo5App;
use rusty_ro5::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();
    log::info!("Descriptor service: {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Ro5 – Lipinski Rule of Five",
        options,
        Box::new(|_cc| Ok(Box::new(RustyRo5App::new(config)))),
    )
}
