use log::{debug, error, info};
use std::time::Duration;

use crate::client::services::debounce::{Debouncer, Ticket};
use crate::client::services::notifier::{Notice, Notifier};
use crate::client::services::viacep_client::{LookupReply, LookupRequest};
use crate::common::cep::MaskedCep;
use crate::common::models::{Address, LookupOutcome};

pub const NOT_FOUND_NOTICE: &str = "CEP não encontrado para os dados informados.";
pub const LOOKUP_FAILED_NOTICE: &str =
    "Erro ao buscar o CEP. Verifique se o número do CEP está correto e tente novamente.";

/// Masked CEP field plus its debounce slot. One per mounted form.
#[derive(Debug)]
pub struct CepInput {
    field: MaskedCep,
    debouncer: Debouncer<String>,
}

impl CepInput {
    pub fn new(debounce: Duration) -> Self {
        Self {
            field: MaskedCep::default(),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Feeds the raw field contents through the mask. Accepted values are
    /// queued in the debouncer and the returned ticket must be awaited.
    pub fn on_keystroke(&mut self, raw: &str) -> Option<Ticket> {
        let accepted = self.field.accept(raw)?.to_string();
        Some(self.debouncer.push(accepted))
    }

    /// Code to search once `ticket` elapsed, `None` if a later keystroke
    /// superseded it.
    pub fn on_elapsed(&mut self, ticket: Ticket) -> Option<String> {
        let code = self.debouncer.fire(ticket)?;
        debug!("Debounce fired with '{}'", code);
        Some(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// Empty code: the address was cleared and nothing is fetched.
    Cleared,
    Fetch(LookupRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// Reply to a superseded request, dropped by the stale policy.
    Discarded,
}

/// Address record and loading flag owned by the form.
#[derive(Debug, Clone, Default)]
pub struct LookupState {
    pub address: Option<Address>,
    pub loading: bool,
    pub discard_stale_responses: bool,
    last_request: u64,
}

impl LookupState {
    pub fn new(discard_stale_responses: bool) -> Self {
        Self {
            discard_stale_responses,
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> u64 {
        self.last_request
    }

    pub fn begin_search(&mut self, code: &str) -> SearchStep {
        self.last_request += 1;
        if code.is_empty() {
            // a clear supersedes anything still in flight
            self.address = None;
            self.loading = false;
            return SearchStep::Cleared;
        }
        self.loading = true;
        info!("Looking up CEP {} (request #{})", code, self.last_request);
        SearchStep::Fetch(LookupRequest {
            id: self.last_request,
            code: code.to_string(),
        })
    }

    pub fn settle(&mut self, reply: LookupReply, notifier: &mut dyn Notifier) -> Settled {
        if self.discard_stale_responses && reply.id != self.last_request {
            debug!(
                "Dropping reply for {} (request #{}, latest #{})",
                reply.code, reply.id, self.last_request
            );
            return Settled::Discarded;
        }

        match reply.result {
            Ok(LookupOutcome::Found(address)) => {
                info!("CEP {} resolved to {}, {}", reply.code, address.localidade, address.uf);
                self.address = Some(address);
            }
            Ok(LookupOutcome::NotFound) => {
                info!("CEP {} not found", reply.code);
                self.address = None;
                notifier.notify(Notice::warning(NOT_FOUND_NOTICE));
            }
            Err(e) => {
                error!("CEP lookup for {} failed: {}", reply.code, e);
                self.address = None;
                notifier.notify(Notice::warning(LOOKUP_FAILED_NOTICE));
            }
        }
        self.loading = false;
        Settled::Applied
    }
}
