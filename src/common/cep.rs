// Maschera "00000-000" per il campo CEP

pub const CEP_PLACEHOLDER: &str = "Exemplo: 00000-000";

const DIGITS: usize = 8;
const HYPHEN_AFTER: usize = 5;

/// Applies the CEP mask to raw field contents.
///
/// Non-digit characters are dropped, input is cut at eight digits and the
/// hyphen is only inserted once a sixth digit exists, so partial codes look
/// like `0131` or `01310-1`.
pub fn apply_mask(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).take(DIGITS).collect();
    let mut masked = String::with_capacity(DIGITS + 1);
    for (i, c) in digits.iter().enumerate() {
        if i == HYPHEN_AFTER {
            masked.push('-');
        }
        masked.push(*c);
    }
    masked
}

/// Masked input field state. Only changes of the masked value are reported.
#[derive(Debug, Clone, Default)]
pub struct MaskedCep {
    value: String,
}

impl MaskedCep {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the new masked value when the keystroke was accepted, `None`
    /// when the mask rejected it and the field did not change.
    pub fn accept(&mut self, raw: &str) -> Option<&str> {
        let masked = apply_mask(raw);
        if masked == self.value {
            return None;
        }
        self.value = masked;
        Some(&self.value)
    }
}
