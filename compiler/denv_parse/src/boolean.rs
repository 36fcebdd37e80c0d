//! Boolean normalization for bare-word right-hand sides.

use denv_ir::Value;

const TRUE_WORDS: [&str; 6] = ["on", "true", "y", "yes", "allow", "enable"];
const FALSE_WORDS: [&str; 5] = ["off", "false", "n", "no", "disable"];

/// Map a bare word to a boolean, ignoring ASCII case.
///
/// Returns `None` for words outside both sets.
pub fn normalize_boolean(word: &str) -> Option<bool> {
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
        Some(false)
    } else {
        None
    }
}

/// The stored value for a bare word: a Boolean when it normalizes, the word
/// itself otherwise.
pub fn bare_word_value(word: &str) -> Value {
    match normalize_boolean(word) {
        Some(flag) => Value::Boolean(flag),
        None => Value::String(word.to_owned()),
    }
}
