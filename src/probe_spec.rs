//! Probe specification model: what the user asked to instrument.
//!
//! A specification names a probe kind, an optional target (binary path for
//! uprobes, subsystem for tracepoints) and an ordered list of attach-point
//! tokens. A token is either a literal symbol name or a glob pattern;
//! whether patterns are legal at all is a capability of the kind.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Tracefs listing of kernel functions available for kprobe attachment.
/// Wildcard attach points for kernel-function probes resolve against it.
pub const KERNEL_FUNCTION_LIST: &str = "/sys/kernel/debug/tracing/available_filter_functions";

/// The closed set of probe kinds understood by the engine.
///
/// `Begin` and `End` are the two synthetic lifecycle probes, fired once at
/// process start and end. They take no target and no attach points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    Kprobe,
    Kretprobe,
    Uprobe,
    Uretprobe,
    Tracepoint,
    #[serde(rename = "BEGIN")]
    Begin,
    #[serde(rename = "END")]
    End,
}

impl ProbeKind {
    /// The tag used in probe names and `prog_name` grouping identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            ProbeKind::Kprobe => "kprobe",
            ProbeKind::Kretprobe => "kretprobe",
            ProbeKind::Uprobe => "uprobe",
            ProbeKind::Uretprobe => "uretprobe",
            ProbeKind::Tracepoint => "tracepoint",
            ProbeKind::Begin => "BEGIN",
            ProbeKind::End => "END",
        }
    }

    /// Symbol listing wildcards of this kind resolve against, if the kind
    /// permits wildcard attach points at all.
    pub fn symbol_source(&self) -> Option<&'static str> {
        match self {
            ProbeKind::Kprobe | ProbeKind::Kretprobe => Some(KERNEL_FUNCTION_LIST),
            _ => None,
        }
    }

    /// Wildcard legality is per kind, not per token: kernel-function kinds
    /// have a fixed symbol listing to resolve against, the rest do not.
    pub fn allows_wildcards(&self) -> bool {
        self.symbol_source().is_some()
    }

    /// Kinds that attach relative to a target (binary path or subsystem).
    pub fn requires_target(&self) -> bool {
        matches!(
            self,
            ProbeKind::Uprobe | ProbeKind::Uretprobe | ProbeKind::Tracepoint
        )
    }

    pub fn is_lifecycle(&self) -> bool {
        matches!(self, ProbeKind::Begin | ProbeKind::End)
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProbeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kprobe" => Ok(ProbeKind::Kprobe),
            "kretprobe" => Ok(ProbeKind::Kretprobe),
            "uprobe" => Ok(ProbeKind::Uprobe),
            "uretprobe" => Ok(ProbeKind::Uretprobe),
            "tracepoint" => Ok(ProbeKind::Tracepoint),
            "BEGIN" => Ok(ProbeKind::Begin),
            "END" => Ok(ProbeKind::End),
            _ => Err(format!("unknown probe kind: {:?}", s)),
        }
    }
}

/// One declarative probe request, immutable once constructed.
///
/// Attach-point tokens keep their original order and their original glob
/// syntax; expansion happens later in
/// [`probe_expander::expand`](crate::probe_expander::expand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSpec {
    pub kind: ProbeKind,
    pub target: Option<String>,
    pub attach_points: Vec<String>,
}

impl ProbeSpec {
    pub fn new<S: Into<String>>(
        kind: ProbeKind,
        target: Option<S>,
        attach_points: Vec<String>,
    ) -> Self {
        ProbeSpec {
            kind,
            target: target.map(Into::into),
            attach_points,
        }
    }

    /// Specification for one of the two synthetic lifecycle probes.
    pub fn lifecycle(kind: ProbeKind) -> Self {
        ProbeSpec {
            kind,
            target: None,
            attach_points: Vec::new(),
        }
    }
}

/// A token is a wildcard iff it carries a match-any marker.
pub fn is_wildcard(token: &str) -> bool {
    token.contains('*')
}
