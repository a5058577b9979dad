//! File-backed wildcard resolution against kernel symbol listings.
//!
//! The kernel exports the set of probe-able functions as a newline
//! separated listing under tracefs. Wildcard attach points are matched
//! against it one line at a time; a glob pattern is compiled to an
//! anchored regex before the scan. Lines may carry a trailing module
//! annotation (`"foo_fn [module]"`), only the first field is the symbol.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

use regex::Regex;
use thiserror::Error;

use crate::probe_expander::WildcardResolver;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The symbol listing could not be opened or read. Distinct from a
    /// pattern that matches nothing, which is an empty result set.
    #[error("cannot read symbol listing {path}: {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid wildcard pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Production resolver reading symbol listings from tracefs.
#[derive(Debug, Default)]
pub struct TracefsSymbols;

impl WildcardResolver for TracefsSymbols {
    fn find_matches(&self, pattern: &str, source: &str) -> Result<BTreeSet<String>, ResolveError> {
        let regex = glob_to_regex(pattern)?;
        let file = File::open(source).map_err(|e| ResolveError::SourceUnreadable {
            path: source.to_string(),
            source: e,
        })?;

        let mut matches = BTreeSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ResolveError::SourceUnreadable {
                path: source.to_string(),
                source: e,
            })?;
            let symbol = match line.split_whitespace().next() {
                Some(symbol) => symbol,
                None => continue,
            };
            if regex.is_match(symbol) {
                matches.insert(symbol.to_string());
            }
        }
        tracing::debug!(
            "{} symbols in {} match {:?}",
            matches.len(),
            source,
            pattern
        );
        Ok(matches)
    }
}

/// Compile a glob pattern into an anchored regex: `*` matches any run of
/// characters, everything else is literal.
fn glob_to_regex(pattern: &str) -> Result<Regex, ResolveError> {
    let mut expr = String::with_capacity(pattern.len() + 4);
    expr.push('^');
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            expr.push_str(".*");
        }
        expr.push_str(&regex::escape(literal));
    }
    expr.push('$');
    Regex::new(&expr).map_err(|e| ResolveError::BadPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
