//! Splitting symbols into words and re-casing them.
//!
//! [`split_symbol`] understands snake case, camel case and runs of capitals,
//! keeping known initialisms such as `API` or `SHA` together:
//!
//! ```
//! use thrift_lint_core::utils::case::{split_symbol, upper_camel_case};
//!
//! assert_eq!(split_symbol("ListingDBService"), ["Listing", "DB", "Service"]);
//! assert_eq!(upper_camel_case("listingIdSHAs"), "ListingIDSHAs");
//! ```

/// Initialisms kept upper case when re-casing.
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DB", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "MD5", "MLS", "OK", "QPS", "RAM", "RHS", "RPC", "SHA", "SLA", "SMTP", "SQL",
    "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID", "URI", "URL", "UTC", "UTF8", "UUID", "VM",
    "XML", "XSRF", "XSS",
];

/// Returns true if `word` is a common initialism, in any case.
#[must_use]
pub fn is_initialism(word: &str) -> bool {
    let upper = word.to_uppercase();
    COMMON_INITIALISMS.contains(&upper.as_str())
}

struct Scanner {
    chars: Vec<char>,
    cursor: usize,
}

impl Scanner {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn next_if(&mut self, accept: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| accept(c))?;
        self.cursor += 1;
        Some(c)
    }

    fn peek_is(&self, test: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(test)
    }

    /// `[a-z0-9]*`
    fn lower_run(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.next_if(|c| c.is_lowercase() || c.is_numeric()) {
            out.push(c);
        }
        out
    }

    /// A run of capitals and digits. The last capital is left for the next
    /// word when a lower-case letter follows it, unless the run including
    /// it is an initialism.
    fn upper_run(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.next_if(|c| c.is_uppercase() || c.is_numeric()) {
            if self.peek_is(char::is_lowercase) && !is_initialism(&format!("{out}{c}")) {
                self.cursor -= 1;
                break;
            }
            out.push(c);
        }
        out
    }
}

/// Splits a symbol into its words.
///
/// A leading underscore yields an empty first word; other underscores only
/// separate. Characters that are neither alphanumeric nor `_` separate
/// words like an underscore.
///
/// `"someCamelCaseAPI"` becomes `["some", "Camel", "Case", "API"]` and
/// `"listingIdSHAs"` becomes `["listing", "Id", "SHA", "s"]`.
#[must_use]
pub fn split_symbol(symbol: &str) -> Vec<String> {
    let mut scan = Scanner {
        chars: symbol.chars().collect(),
        cursor: 0,
    };
    let mut out = Vec::new();
    while let Some(c) = scan.peek() {
        let word = if c.is_lowercase() {
            scan.lower_run()
        } else if c.is_uppercase() {
            scan.cursor += 1;
            if scan.peek_is(char::is_lowercase) {
                format!("{c}{}", scan.lower_run())
            } else {
                scan.cursor -= 1;
                scan.upper_run()
            }
        } else if c.is_numeric() {
            let mut digits = String::new();
            while let Some(d) = scan.next_if(char::is_numeric) {
                digits.push(d);
            }
            digits
        } else {
            scan.cursor += 1;
            if c == '_' && out.is_empty() {
                String::new()
            } else {
                continue;
            }
        };
        out.push(word);
    }
    out
}

fn title(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn camel_word(word: &str) -> String {
    if is_initialism(word) {
        word.to_uppercase()
    } else {
        title(word)
    }
}

fn camel_case(symbol: &str, lower_first: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut first = true;
    for word in split_symbol(symbol) {
        if word.is_empty() {
            parts.push("_".to_string());
        } else if first && lower_first {
            parts.push(word.to_lowercase());
            first = false;
        } else if word == "s" && !parts.is_empty() {
            // Plural of the previous word, as in `SHAs`.
            if let Some(last) = parts.last_mut() {
                last.push('s');
            }
        } else {
            parts.push(camel_word(&word));
            first = false;
        }
    }
    parts.concat()
}

/// Converts a symbol to `UpperCamelCase`, keeping initialisms upper case.
#[must_use]
pub fn upper_camel_case(symbol: &str) -> String {
    camel_case(symbol, false)
}

/// Converts a symbol to `lowerCamelCase`, keeping later initialisms upper case.
#[must_use]
pub fn lower_camel_case(symbol: &str) -> String {
    camel_case(symbol, true)
}

fn snake_case(symbol: &str, convert: fn(&str) -> String) -> String {
    split_symbol(symbol)
        .iter()
        .map(|word| {
            if word.is_empty() {
                "_".to_string()
            } else {
                convert(word)
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a symbol to `lower_snake_case`.
#[must_use]
pub fn lower_snake_case(symbol: &str) -> String {
    snake_case(symbol, str::to_lowercase)
}

/// Converts a symbol to `UPPER_SNAKE_CASE`.
#[must_use]
pub fn upper_snake_case(symbol: &str) -> String {
    snake_case(symbol, str::to_uppercase)
}

/// Returns the last `.`-separated segment, e.g. the package of a namespace.
#[must_use]
pub fn dot_suffix(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
