//! Editorial body formatting

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

/// Split at every whitespace run that follows sentence punctuation.
/// The whitespace itself is dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && prev.is_some_and(|p| SENTENCE_END.contains(&p)) {
            out.push(&text[start..idx]);
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }

    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Group sentences into paragraphs of two, then three, then two, and so on.
/// Whatever is left over becomes the final paragraph.
pub fn editorial_paragraphs(content: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for sentence in sentences(content) {
        current.push(sentence);
        let target = if paragraphs.len() % 2 == 0 { 2 } else { 3 };
        if current.len() >= target {
            paragraphs.push(current.join(" ").trim().to_string());
            current.clear();
        }
    }

    let rest = current.join(" ");
    let rest = rest.trim();
    if !rest.is_empty() {
        paragraphs.push(rest.to_string());
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_has_no_paragraphs() {
        assert!(editorial_paragraphs("").is_empty());
        assert!(editorial_paragraphs("   \n ").is_empty());
    }

    #[test]
    fn test_sentence_split_keeps_punctuation() {
        assert_eq!(
            sentences("Ink flows.  Paper waits!\nDoes it dry?"),
            vec!["Ink flows.", "Paper waits!", "Does it dry?"]
        );
        // No whitespace after the full stop, so no split
        assert_eq!(sentences("Version 1.5 ships"), vec!["Version 1.5 ships"]);
    }

    #[test]
    fn test_paragraph_sizes_alternate() {
        let content = "S1. S2. S3. S4. S5. S6. S7. S8.";
        assert_eq!(
            editorial_paragraphs(content),
            vec!["S1. S2.", "S3. S4. S5.", "S6. S7.", "S8."]
        );
    }

    #[test]
    fn test_single_sentence_is_one_paragraph() {
        assert_eq!(editorial_paragraphs("Only one."), vec!["Only one."]);
    }

    #[test]
    fn test_trailing_whitespace_adds_nothing() {
        assert_eq!(editorial_paragraphs("A. B. "), vec!["A. B."]);
    }
}
