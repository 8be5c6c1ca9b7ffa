use log::warn;

/// A non-blocking warning shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One-way notification channel. Emitting never blocks and gets no answer.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Sends notices to the log; used where there is no toast area.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        warn!("{}", notice.message);
    }
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
