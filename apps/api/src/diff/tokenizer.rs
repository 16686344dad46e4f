//! Tokenizer: splits text into alternating whitespace / non-whitespace runs.
//!
//! Tokens borrow from the input and concatenate back to it exactly.

/// Splits `text` into maximal whitespace and non-whitespace runs.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match in_whitespace {
            Some(current) if current != ws => {
                tokens.push(&text[start..idx]);
                start = idx;
                in_whitespace = Some(ws);
            }
            Some(_) => {}
            None => in_whitespace = Some(ws),
        }
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// True when the token is a whitespace run.
pub fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

/// Lowercased, whitespace-separated words of `text`, empty words dropped.
pub fn lowercase_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
