//! Probe expansion engine: one specification in, zero or more concrete
//! probe records out.
//!
//! Wildcard attach points are resolved through an injected
//! [`WildcardResolver`] so expansion can be tested without a live kernel
//! symbol listing. Expansion is all-or-nothing per specification: an
//! illegal wildcard or a resolver failure fails the whole call and no
//! records are handed out.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::probe::{self, Probe};
use crate::probe_spec::{is_wildcard, ProbeKind, ProbeSpec};
use crate::symbol_source::ResolveError;

/// Capability for turning a glob pattern into the set of concrete symbol
/// names it matches within one symbol source.
pub trait WildcardResolver {
    /// Look up `pattern` against the listing at `source`. An empty set is
    /// a valid result; a failed lookup must be reported as an error, never
    /// collapsed into an empty set.
    fn find_matches(&self, pattern: &str, source: &str) -> Result<BTreeSet<String>, ResolveError>;
}

#[derive(Debug, Error)]
pub enum ExpandError {
    /// A wildcard token under a kind that only accepts literal attach
    /// points. The whole specification is rejected, not just the token.
    #[error("{kind} probes do not support wildcard attach points: {pattern:?}")]
    WildcardNotSupported { kind: ProbeKind, pattern: String },

    #[error("{kind} probes require a target")]
    MissingTarget { kind: ProbeKind },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Expand one specification into its concrete probe records.
///
/// Lifecycle kinds produce exactly one synthetic record. For everything
/// else, each literal token produces one record and each wildcard token
/// produces one record per resolver match, in the resolver's set order;
/// a wildcard matching nothing produces nothing and is not an error.
/// Token order is preserved across the output, and every record shares the
/// `prog_name` computed from the original, unexpanded token list.
pub fn expand(spec: &ProbeSpec, resolver: &dyn WildcardResolver) -> Result<Vec<Probe>, ExpandError> {
    if spec.kind.is_lifecycle() {
        return Ok(vec![Probe::lifecycle(spec.kind)]);
    }

    if spec.kind.requires_target() && spec.target.is_none() {
        return Err(ExpandError::MissingTarget { kind: spec.kind });
    }

    // Wildcard legality is a property of the kind: one illegal token
    // anywhere voids the specification before any record is built.
    for token in &spec.attach_points {
        if is_wildcard(token) && !spec.kind.allows_wildcards() {
            return Err(ExpandError::WildcardNotSupported {
                kind: spec.kind,
                pattern: token.clone(),
            });
        }
    }

    // Shared grouping identifier, computed once from the original tokens.
    let prog_name = probe::prog_name(spec);
    let target = spec.target.as_deref();

    let mut probes = Vec::new();
    for token in &spec.attach_points {
        let source = match spec.kind.symbol_source() {
            Some(source) if is_wildcard(token) => source,
            _ => {
                probes.push(Probe::resolved(spec.kind, target, token, &prog_name));
                continue;
            }
        };

        tracing::debug!("resolving wildcard {:?} against {}", token, source);
        let matches = resolver.find_matches(token, source)?;
        for symbol in &matches {
            probes.push(Probe::resolved(spec.kind, target, symbol, &prog_name));
        }
    }

    Ok(probes)
}
