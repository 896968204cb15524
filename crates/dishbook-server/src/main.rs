use dishbook_server::{logging::init_tracing, server, settings::Settings};

#[tokio::main]
async fn main() {
    let settings = match Settings::load_default() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(settings.log.level.as_deref());

    if let Err(e) = server::run(settings).await {
        tracing::error!("Dishbook stopped with error: {e}");
        std::process::exit(1);
    }
}
