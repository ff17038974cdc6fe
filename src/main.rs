use crew_form::client::config::ClientConfig;
use crew_form::client::gui::app::CrewFormApp;
use crew_form::client::services::crew_service::CrewService;
use crew_form::utils::logger;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let cfg = ClientConfig::from_env();
    logger::init(&cfg.log_level);
    cfg.log_summary();

    let crew_service = CrewService::new(&cfg.endpoint)?;
    CrewFormApp::run(iced::Settings::with_flags(crew_service))?;
    Ok(())
}
