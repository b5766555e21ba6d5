/// Derives a C++ identifier from a file stem.
///
/// The stem is lowercased and every maximal run of non-word characters
/// (anything other than a Unicode alphanumeric or `_`) becomes a single `_`.
/// Distinct stems can collapse to the same identifier, e.g. `my-file` and
/// `my_file`.
pub fn derive_identifier(stem: &str) -> String {
    let mut identifier = String::with_capacity(stem.len());
    let mut in_run = false;

    for c in stem.to_lowercase().chars() {
        if is_word_char(c) {
            identifier.push(c);
            in_run = false;
        } else if !in_run {
            identifier.push('_');
            in_run = true;
        }
    }

    identifier
}

/// Uppercases the first character, used for container names.
pub fn capitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
