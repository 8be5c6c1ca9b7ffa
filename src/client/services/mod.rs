pub mod debounce;
pub mod notifier;
pub mod viacep_client;
