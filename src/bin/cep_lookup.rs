use buscacep::client::config::LookupConfig;
use buscacep::client::gui::widgets::information_data::{display, FieldDisplay};
use buscacep::client::models::app_state::{CepInput, LookupState, SearchStep};
use buscacep::client::services::debounce::Ticket;
use buscacep::client::services::notifier::{LogNotifier, Notifier};
use buscacep::client::services::viacep_client::{run_lookup, AddressLookup, ViaCepClient};
use buscacep::common::cep::apply_mask;
use buscacep::common::models::AddressField;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "buscacep-cli", about = "Look up Brazilian postal codes (CEP) on ViaCEP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single CEP and print the address
    Lookup { cep: String },
    /// Treat every stdin line as the new contents of the CEP field
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    buscacep::utils::logger::init();
    let cli = Cli::parse();
    let config = LookupConfig::from_env();
    let lookup: Arc<dyn AddressLookup> = Arc::new(ViaCepClient::new(&config.base_url)?);
    let mut state = LookupState::new(config.discard_stale_responses);
    let mut notifier = LogNotifier;

    match cli.command {
        Commands::Lookup { cep } => {
            let code = apply_mask(&cep);
            search(&lookup, &mut state, &code, &mut notifier).await;
            print_address(&state);
        }
        Commands::Watch => {
            let mut input = CepInput::new(config.debounce);
            let mut lines = BufReader::new(stdin()).lines();
            let mut pending: Option<Ticket> = None;
            loop {
                tokio::select! {
                    line = lines.next_line() => {
                        let Some(raw) = line? else { break };
                        if let Some(ticket) = input.on_keystroke(&raw) {
                            println!("> {}", input.value());
                            pending = Some(ticket);
                        }
                    }
                    ticket = wait_for(pending) => {
                        pending = None;
                        if let Some(code) = input.on_elapsed(ticket) {
                            search(&lookup, &mut state, &code, &mut notifier).await;
                            print_address(&state);
                        }
                    }
                }
            }
            // stdin closed: let the last keystroke fire
            if let Some(ticket) = pending {
                if let Some(code) = input.on_elapsed(ticket.wait().await) {
                    search(&lookup, &mut state, &code, &mut notifier).await;
                    print_address(&state);
                }
            }
        }
    }
    Ok(())
}

async fn wait_for(pending: Option<Ticket>) -> Ticket {
    match pending {
        Some(ticket) => ticket.wait().await,
        None => std::future::pending().await,
    }
}

async fn search(lookup: &Arc<dyn AddressLookup>, state: &mut LookupState, code: &str, notifier: &mut dyn Notifier) {
    if let SearchStep::Fetch(request) = state.begin_search(code) {
        let reply = run_lookup(lookup.clone(), request).await;
        state.settle(reply, notifier);
    }
}

fn print_address(state: &LookupState) {
    let address = state.address.as_ref();
    for field in AddressField::all() {
        if let FieldDisplay::Value { label, text } = display(field.label(), field.text(address), state.loading) {
            println!("{:<11} {}", format!("{}:", label), text);
        }
    }
}
