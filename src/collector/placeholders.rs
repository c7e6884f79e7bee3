use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Regex matching `${IDENTIFIER}` placeholder tokens in a configuration
/// document.
const PLACEHOLDER_RE: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

fn placeholder_re() -> &'static Regex {
    static RE_ONCE: OnceLock<Regex> = OnceLock::new();
    RE_ONCE.get_or_init(|| Regex::new(PLACEHOLDER_RE).unwrap())
}

/// Returns the distinct placeholder identifiers in `document`.
///
/// The substitution step running at pod start must provide a value for each
/// of these before the document is usable configuration; this function only
/// reports them, it never substitutes.
pub fn placeholder_names(document: &str) -> BTreeSet<String> {
    placeholder_re()
        .captures_iter(document)
        .map(|capture| capture[1].to_string())
        .collect()
}
