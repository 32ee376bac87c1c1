//! PostgreSQL-to-SQLite dialect conversion
//!
//! Text-substitution based rewriting of the handful of PostgreSQL constructs
//! that SQLite rejects: boolean literals, `::type` casts, timestamp
//! functions, `SERIAL` column types, parameterized `DECIMAL`/`NUMERIC`
//! types, and inline `CHECK` constraints.
//!
//! This is deliberately not a SQL parser. Rules operate on raw text, so a
//! string literal that happens to contain a matched token (e.g. `'true'`)
//! is rewritten too. Boolean matching is word-bounded so identifiers like
//! `true_flag` survive, but quoted content is not protected.

use once_cell::sync::Lazy;
use regex::Regex;

/// One rewrite in the conversion pipeline.
struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            // Patterns are fixed at build time
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// The rule set, applied strictly in order. Each rule sees the previous
/// rule's output, and no rule matches text produced by another, which is
/// what makes the whole pipeline idempotent.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("boolean-true", r"(?i)\btrue\b", "1"),
        Rule::new("boolean-false", r"(?i)\bfalse\b", "0"),
        Rule::new("cast-suffix", r"::\w+", ""),
        Rule::new("now-call", r"(?i)\bNOW\s*\(\s*\)", "datetime('now')"),
        Rule::new(
            "current-timestamp",
            r"(?i)\bCURRENT_TIMESTAMP\b",
            "datetime('now')",
        ),
        Rule::new("current-date", r"(?i)\bCURRENT_DATE\b", "date('now')"),
        // SQLite auto-increments INTEGER PRIMARY KEY columns via rowid
        // aliasing, so SERIAL collapses to plain INTEGER.
        Rule::new("serial-type", r"(?i)\b(?:BIG|SMALL)?SERIAL\b", "INTEGER"),
        Rule::new(
            "numeric-type",
            r"(?i)\b(?:DECIMAL|NUMERIC)\s*\(\s*\d+\s*,\s*\d+\s*\)",
            "REAL",
        ),
        // Handles unnested conditions only. A CHECK with parentheses inside
        // the condition is left alone and will fail at execution time,
        // surfacing in that file's outcome.
        Rule::new("check-constraint", r"(?i)(?:,\s*)?\s*\bCHECK\s*\([^()]*\)", ""),
    ]
});

/// Convert one SQL script from PostgreSQL syntax to SQLite syntax.
///
/// Pure text-to-text: never fails, and passes unrecognized constructs
/// through unchanged. Idempotent: `convert(convert(s)) == convert(s)`.
pub fn convert(sql: &str) -> String {
    let mut text = sql.to_string();
    for rule in RULES.iter() {
        if rule.pattern.is_match(&text) {
            tracing::debug!(rule = rule.name, "applying dialect rewrite");
            text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
        }
    }
    text
}
