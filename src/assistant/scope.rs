/// Vocabulary a question must touch to be considered on-topic for the
/// device and its support service.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "signifier",
    "sleep",
    "apnea",
    "device",
    "therapy",
    "tongue",
    "usage",
    "use",
    "setup",
    "install",
    "pair",
    "charge",
    "battery",
    "clean",
    "maintain",
    "maintenance",
    "support",
    "appointment",
    "book",
    "reschedule",
    "cancel",
    "hours",
    "contact",
    "warranty",
    "replacement",
    "spare",
    "parts",
    "manual",
    "guide",
    "troubleshoot",
    "error",
    "issue",
];

pub fn in_scope(question: &str, keywords: &[String]) -> bool {
    let lowered = question.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Maps curly quotes and non-breaking spaces to their ASCII forms and trims.
pub fn normalize_text(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .replace('\u{2018}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{00A0}', " ")
        .trim()
        .to_string()
}
