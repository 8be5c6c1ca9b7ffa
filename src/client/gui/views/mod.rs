pub mod lookup_form;
pub mod toasts;
