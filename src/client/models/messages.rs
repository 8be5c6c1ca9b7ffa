use crate::client::services::debounce::Ticket;
use crate::client::services::viacep_client::LookupReply;

#[derive(Debug, Clone)]
pub enum Message {
    // Contenuto grezzo del campo CEP ad ogni tasto
    CepInputChanged(String),
    DebounceElapsed(Ticket),
    LookupSettled(LookupReply),
    DismissToast(u64),
}
