//! Sentence boundary detection.
//!
//! Text is first cut into passages at line breaks, then each passage is cut
//! after a run of `.`, `!` or `?` (plus any closing quotes or brackets) that is
//! followed by whitespace or the end of the passage.

const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

const fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}')
}

/// Non-blank lines of `text`.
pub fn split_into_passages(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Sentences of a single passage, trimmed.
pub fn split_passage(passage: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = passage.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        while chars.next_if(|&(_, c)| is_terminator(c) || is_closer(c)).is_some() {}

        match chars.peek() {
            Some(&(end, next)) if next.is_whitespace() => {
                sentences.push(&passage[start..end]);
                start = end;
            }
            None => {
                sentences.push(&passage[start..]);
                start = passage.len();
            }
            Some(_) => {}
        }
    }

    if start < passage.len() {
        sentences.push(&passage[start..]);
    }

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Every sentence of `text`. A sentence never spans a line break.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    split_into_passages(text)
        .flat_map(split_passage)
        .map(String::from)
        .collect()
}
