/// Phrase tables, applied in order. Later entries see the output of earlier
/// ones, so order is part of the behavior.
const EN_TO_ES: &[(&str, &str)] = &[
    ("hello", "hola"),
    ("world", "mundo"),
    ("good morning", "buenos días"),
];

const EN_TO_FR: &[(&str, &str)] = &[
    ("hello", "bonjour"),
    ("world", "monde"),
    ("good morning", "bonjour"),
];

const EN_TO_DE: &[(&str, &str)] = &[
    ("hello", "hallo"),
    ("world", "welt"),
    ("good morning", "guten morgen"),
];

fn phrase_table(source: &str, target: &str) -> &'static [(&'static str, &'static str)] {
    match format!("{source}_to_{target}").as_str() {
        "en_to_es" => EN_TO_ES,
        "en_to_fr" => EN_TO_FR,
        "en_to_de" => EN_TO_DE,
        _ => &[],
    }
}

/// Word-for-word "translation": lowercase, swap known phrases, title-case.
///
/// Unsupported language pairs come back title-cased but otherwise untouched.
pub fn translate(text: &str, source: &str, target: &str) -> String {
    let mut translated = text.to_lowercase();
    for (from, to) in phrase_table(source, target) {
        translated = translated.replace(from, to);
    }
    title_case(&translated)
}

/// Uppercases every character that follows an uncased one and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        // Only cased letters start a word; uncased scripts like CJK do not.
        prev_is_letter = c.is_lowercase() || c.is_uppercase();
    }

    out
}
