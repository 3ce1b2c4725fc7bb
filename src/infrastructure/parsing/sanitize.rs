//! Text clean-up helpers shared by the field rules

/// Lowercase and trim a skill name
pub fn clean_skill(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

pub fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

/// Concatenate fragments up to, not including, the first one equal to `stop`
pub fn concat_until<'a>(fragments: impl IntoIterator<Item = &'a str>, stop: &str) -> String {
    fragments
        .into_iter()
        .take_while(|fragment| *fragment != stop)
        .collect()
}

/// Fold every ASCII digit of `text` into a number, left to right.
///
/// Everything else is ignored, so `"1,234 media"` gives 1234 and `"1.5"` gives 15.
pub fn fold_digits(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Connection count carried by a single text fragment.
///
/// A fragment made only of digits is its own value; the capped label
/// `500+` counts as 500. Anything else carries no count.
pub fn connection_value(fragment: &str) -> Option<u64> {
    if fragment == "500+" {
        return Some(500);
    }
    if !fragment.is_empty() && fragment.bytes().all(|b| b.is_ascii_digit()) {
        return fragment.parse().ok();
    }
    None
}

/// Remainder of `url` after the first occurrence of `marker`
pub fn after_marker<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    url.split_once(marker).map(|(_, rest)| rest)
}
