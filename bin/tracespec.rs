//! Command-line front door: expand a probe specification and print the
//! resulting records. The probe language front-end lives elsewhere; this
//! takes the specification fields directly as arguments.

use anyhow::Context;
use clap::Parser;

use tracespec::probe_expander;
use tracespec::probe_spec::{ProbeKind, ProbeSpec};
use tracespec::symbol_source::TracefsSymbols;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Opt {
    /// Probe kind: kprobe, kretprobe, uprobe, uretprobe, tracepoint, BEGIN, END
    #[arg(short, long, value_parser = parse_kind)]
    kind: ProbeKind,

    /// Target binary path (uprobes) or tracepoint subsystem
    #[arg(short, long)]
    target: Option<String>,

    /// Attach-point tokens; `*` patterns are expanded for kernel probes
    attach_points: Vec<String>,

    /// Emit the expanded records as JSON
    #[arg(long)]
    json: bool,
}

fn parse_kind(s: &str) -> Result<ProbeKind, String> {
    s.parse()
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opt = Opt::parse();
    let spec = ProbeSpec::new(opt.kind, opt.target, opt.attach_points);

    let probes = probe_expander::expand(&spec, &TracefsSymbols)
        .context("failed to expand probe specification")?;

    if opt.json {
        println!("{}", serde_json::to_string_pretty(&probes)?);
    } else {
        for probe in &probes {
            println!("{}\t[{}]", probe.name, probe.prog_name);
        }
        tracing::info!("{} probes expanded", probes.len());
    }

    Ok(())
}
