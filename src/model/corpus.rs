use std::collections::HashMap;

use crate::alphabet;

/// Generate an n-gram frequency table from raw text.
///
/// The text is normalized to alphabet letters, every contiguous n-letter
/// window is counted, and the result is formatted as `<NGRAM> <count>`
/// lines sorted by descending count (ties by n-gram, so regeneration is
/// deterministic). The output parses back through the table loader with the
/// default space delimiter.
pub fn generate_table(content: &str, n: usize) -> String {
    let text = alphabet::normalize(content);
    if n == 0 || text.len() < n {
        return String::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for i in 0..=text.len() - n {
        *counts.entry(&text[i..i + n]).or_default() += 1;
    }

    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut output = String::new();
    for (ngram, count) in entries {
        output.push_str(ngram);
        output.push(' ');
        output.push_str(&count.to_string());
        output.push('\n');
    }
    output
}
