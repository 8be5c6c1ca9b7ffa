use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::config::LookupConfig;
use crate::client::gui::views::lookup_form;
use crate::client::gui::views::toasts::ToastQueue;
use crate::client::models::app_state::{CepInput, LookupState, SearchStep};
use crate::client::models::messages::Message;
use crate::client::services::viacep_client::{run_lookup, AddressLookup};

pub struct AppFlags {
    pub config: LookupConfig,
    pub lookup: Arc<dyn AddressLookup>,
}

pub struct CepApp {
    pub input: CepInput,
    pub state: LookupState,
    pub toasts: ToastQueue,
    pub lookup: Arc<dyn AddressLookup>,
    pub config: LookupConfig,
}

impl CepApp {
    // Avvia un timer per ogni toast appena comparso
    fn schedule_toast_dismissals(&mut self) -> Command<Message> {
        let duration = self.config.toast_duration;
        Command::batch(self.toasts.take_unscheduled().into_iter().map(|id| {
            Command::perform(tokio::time::sleep(duration), move |_| Message::DismissToast(id))
        }))
    }
}

impl Application for CepApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let app = CepApp {
            input: CepInput::new(flags.config.debounce),
            state: LookupState::new(flags.config.discard_stale_responses),
            toasts: ToastQueue::default(),
            lookup: flags.lookup,
            config: flags.config,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Busca CEP".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CepInputChanged(raw) => match self.input.on_keystroke(&raw) {
                Some(ticket) => Command::perform(ticket.wait(), Message::DebounceElapsed),
                None => Command::none(),
            },
            Message::DebounceElapsed(ticket) => {
                let Some(code) = self.input.on_elapsed(ticket) else {
                    return Command::none();
                };
                match self.state.begin_search(&code) {
                    SearchStep::Cleared => Command::none(),
                    SearchStep::Fetch(request) => {
                        Command::perform(run_lookup(self.lookup.clone(), request), Message::LookupSettled)
                    }
                }
            }
            Message::LookupSettled(reply) => {
                self.state.settle(reply, &mut self.toasts);
                self.schedule_toast_dismissals()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        lookup_form::view(&self.input, &self.state, &self.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::viacep_client::{LookupError, LookupReply};
    use crate::common::models::LookupOutcome;
    use async_trait::async_trait;

    struct UnknownCodes;

    #[async_trait]
    impl AddressLookup for UnknownCodes {
        async fn lookup(&self, _code: &str) -> Result<LookupOutcome, LookupError> {
            Ok(LookupOutcome::NotFound)
        }
    }

    fn app() -> CepApp {
        let flags = AppFlags {
            config: LookupConfig::default(),
            lookup: Arc::new(UnknownCodes),
        };
        CepApp::new(flags).0
    }

    #[tokio::test]
    async fn settled_warning_gets_a_dismissal_timer() {
        let mut app = app();
        let _ = app.update(Message::LookupSettled(LookupReply {
            id: 1,
            code: "00000-000".to_string(),
            result: Ok(LookupOutcome::NotFound),
        }));

        assert_eq!(app.toasts.toasts().len(), 1);
        // the timer was started during update, nothing is left to schedule
        assert!(app.toasts.take_unscheduled().is_empty());

        let id = app.toasts.toasts()[0].id;
        let _ = app.update(Message::DismissToast(id));
        assert!(app.toasts.toasts().is_empty());
    }

    #[tokio::test]
    async fn found_address_raises_no_toast() {
        let mut app = app();
        let _ = app.update(Message::LookupSettled(LookupReply {
            id: 1,
            code: "01310-100".to_string(),
            result: Ok(LookupOutcome::Found(Default::default())),
        }));

        assert!(app.toasts.toasts().is_empty());
        assert!(app.state.address.is_some());
    }
}
