//! Instrumentation-specification engine for a dynamic tracer.
//!
//! Two independent halves live here. The write side turns a declarative
//! [`probe_spec::ProbeSpec`] into the concrete list of [`probe::Probe`]
//! records the attachment layer needs, expanding wildcard attach points
//! against a kernel symbol listing. The read side takes raw fixed-width
//! aggregation map entries plus their key schema and produces a stable,
//! type-aware display ordering.

pub mod map_key;
pub mod probe;
pub mod probe_expander;
pub mod probe_spec;
pub mod sort;
pub mod symbol_source;
