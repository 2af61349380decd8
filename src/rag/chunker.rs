/// Strips carriage returns and non-breaking spaces and collapses runs of
/// whitespace into single spaces.
pub fn clean_text(text: &str) -> String {
    let text = text.replace('\u{00A0}', " ").replace('\r', "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a markdown document into chunks, flushing on headings and on the
/// size cap so each chunk stays embeddable on its own.
pub fn chunk_markdown(md: &str, max_chars: usize) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut buf = String::new();

    for line in md.split('\n') {
        if line.trim_start().starts_with('#') && !buf.is_empty() {
            parts.push(buf.trim().to_string());
            buf.clear();
        }
        if buf.len() + line.len() + 1 > max_chars {
            parts.push(buf.trim().to_string());
            buf.clear();
        }
        buf.push_str(line);
        buf.push('\n');
    }
    if !buf.trim().is_empty() {
        parts.push(buf.trim().to_string());
    }

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}
