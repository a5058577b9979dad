//! Fully-resolved probe records handed to the attachment layer.
//!
//! A `Probe` carries exactly one concrete attach point; glob syntax never
//! survives past expansion. Records expanded from the same specification
//! share a `prog_name`, which the code generator uses to compile one
//! program per group.

use serde::Serialize;
use std::fmt;

use crate::probe_spec::{ProbeKind, ProbeSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Probe {
    pub kind: ProbeKind,
    /// One concrete, non-wildcard symbol name.
    pub attach_point: String,
    /// Grouping identifier shared by every record from one specification.
    pub prog_name: String,
    /// Unique display identifier for this record.
    pub name: String,
}

impl Probe {
    /// Record for one concrete attach point. `prog_name` is computed once
    /// per specification by [`prog_name`] and passed through unchanged.
    pub fn resolved(
        kind: ProbeKind,
        target: Option<&str>,
        attach_point: &str,
        prog_name: &str,
    ) -> Self {
        let name = match target {
            Some(target) => format!("{}:{}:{}", kind, target, attach_point),
            None => format!("{}:{}", kind, attach_point),
        };
        Probe {
            kind,
            attach_point: attach_point.to_string(),
            prog_name: prog_name.to_string(),
            name,
        }
    }

    /// Synthetic record for a lifecycle kind. Lifecycle probes attach to a
    /// generated user-space trigger function, so the record itself is a
    /// uprobe; name and prog_name are both the bare lifecycle tag.
    pub fn lifecycle(kind: ProbeKind) -> Self {
        let tag = kind.tag();
        Probe {
            kind: ProbeKind::Uprobe,
            attach_point: format!("{}_trigger", tag),
            prog_name: tag.to_string(),
            name: tag.to_string(),
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The shared grouping identifier for all records expanded from `spec`:
/// the kind tag, the target when present, and the comma-join of every
/// original attach-point token, wildcards verbatim.
pub fn prog_name(spec: &ProbeSpec) -> String {
    let joined = spec.attach_points.join(",");
    match &spec.target {
        Some(target) => format!("{}:{}:{}", spec.kind, target, joined),
        None => format!("{}:{}", spec.kind, joined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_probe_name() {
        let p = Probe::resolved(ProbeKind::Kprobe, None, "sys_read", "kprobe:sys_read");
        assert_eq!(p.name, "kprobe:sys_read");
        assert_eq!(p.attach_point, "sys_read");
    }

    #[test]
    fn test_targeted_probe_name() {
        let p = Probe::resolved(
            ProbeKind::Uprobe,
            Some("/bin/sh"),
            "foo",
            "uprobe:/bin/sh:foo",
        );
        assert_eq!(p.name, "uprobe:/bin/sh:foo");
    }

    #[test]
    fn test_lifecycle_record_shape() {
        let p = Probe::lifecycle(ProbeKind::Begin);
        assert_eq!(p.kind, ProbeKind::Uprobe);
        assert_eq!(p.attach_point, "BEGIN_trigger");
        assert_eq!(p.prog_name, "BEGIN");
        assert_eq!(p.name, "BEGIN");
    }

    #[test]
    fn test_prog_name_keeps_original_tokens() {
        let spec = ProbeSpec::new::<&str>(
            ProbeKind::Kprobe,
            None,
            vec![
                "sys_read".to_string(),
                "my_*".to_string(),
                "sys_write".to_string(),
            ],
        );
        assert_eq!(prog_name(&spec), "kprobe:sys_read,my_*,sys_write");
    }

    #[test]
    fn test_prog_name_with_target() {
        let spec = ProbeSpec::new(
            ProbeKind::Tracepoint,
            Some("sched"),
            vec!["sched_switch".to_string()],
        );
        assert_eq!(prog_name(&spec), "tracepoint:sched:sched_switch");
    }
}
