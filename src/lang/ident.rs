// Naming rules shared by labels, variables, verbs and function calls.

/// Variables and functions: a letter, then letters, digits or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Labels may also carry hyphens, but never start with a digit or underscore.
pub fn is_label(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_alphabetic() || ch == '-' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_')
}

/// Labels are looked up without regard to case.
pub fn label_key(s: &str) -> String {
    s.trim().to_lowercase()
}
