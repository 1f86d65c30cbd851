//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Lafz {}", lafz_app::APP_VERSION);

    lafz_app::run()
}
