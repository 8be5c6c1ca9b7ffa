use buscacep::client::config::LookupConfig;
use buscacep::client::gui::app::{AppFlags, CepApp};
use buscacep::client::services::viacep_client::{AddressLookup, ViaCepClient};
use iced::Application;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    buscacep::utils::logger::init();
    let config = LookupConfig::from_env();
    let lookup: Arc<dyn AddressLookup> = Arc::new(ViaCepClient::new(&config.base_url)?);

    let mut settings = iced::Settings::with_flags(AppFlags { config, lookup });
    settings.window.size = iced::Size::new(720.0, 640.0);
    CepApp::run(settings)?;
    Ok(())
}
