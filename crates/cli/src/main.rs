use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dsymbol::api::{BreakMode, DSymbol, Edit, RandomSymbolCfg, StepCount};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod commands;
mod provenance;

use commands::{Report, Source, SymbolOp};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect and edit Delaney-Dress symbols")]
struct Cmd {
    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Also write the result as JSON here, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct Input {
    /// A D-symbol in text form
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    symbol: Option<String>,
    /// A file with one D-symbol per line
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    One,
    #[value(name = "some")]
    Several,
    All,
}

impl From<ModeArg> for BreakMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::One => BreakMode::RemoveOne,
            ModeArg::Several => BreakMode::RemoveSome,
            ModeArg::All => BreakMode::RemoveAll,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print size, counts and invariants
    Info(Input),
    /// Print the dual symbol
    Dual(Input),
    /// Print the orientation cover
    Orient(Input),
    /// Print the quotient by all symmetries
    Maxsym(Input),
    /// Print the symbol renumbered by tile size
    Reorder(Input),
    /// Print whether two symbols are isomorphic
    Iso {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        other: String,
        /// Compare involutions only, ignoring branching values
        #[arg(long)]
        sets_only: bool,
    },
    /// Contract an edge (1-based edge ordinal)
    Contract {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        edge: usize,
    },
    /// Merge the two tiles at an edge
    GlueEdge {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        edge: usize,
    },
    /// Merge all tiles around a vertex
    GlueVertex {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        vertex: usize,
    },
    /// Truncate a vertex
    Truncate {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        vertex: usize,
    },
    /// Lower the symmetry of an oriented symbol
    Break {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value = "one")]
        mode: ModeArg,
        #[arg(long, default_value_t = 32)]
        max_results: usize,
        /// Keep one symbol per orbifold name
        #[arg(long)]
        prune_names: bool,
    },
    /// Print random symbols
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 48)]
        max_size: usize,
        #[arg(long, default_value_t = 4)]
        max_steps: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cmd.log_level))
        .context("invalid --log-level")?;
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (input, op) = match cmd.action {
        Action::Report => return report(),
        Action::Random {
            seed,
            count,
            max_size,
            max_steps,
        } => {
            let cfg = RandomSymbolCfg {
                steps: StepCount::Uniform {
                    min: 0,
                    max: max_steps,
                },
                max_size,
                ..RandomSymbolCfg::default()
            };
            let report = commands::run_random(&cfg, seed, count);
            let params = json!({ "seed": seed, "count": count, "max_size": max_size, "max_steps": max_steps });
            return emit(&report, cmd.out.as_deref(), params);
        }
        Action::Info(input) => (input, SymbolOp::Info),
        Action::Dual(input) => (input, SymbolOp::Dual),
        Action::Orient(input) => (input, SymbolOp::Orient),
        Action::Maxsym(input) => (input, SymbolOp::MaxSym),
        Action::Reorder(input) => (input, SymbolOp::Reorder),
        Action::Iso {
            input,
            other,
            sets_only,
        } => {
            let other: DSymbol = other.parse().context("parsing --other")?;
            (input, SymbolOp::Iso { other, sets_only })
        }
        Action::Contract { input, edge } => (input, SymbolOp::Edit(Edit::ContractEdge(edge))),
        Action::GlueEdge { input, edge } => {
            (input, SymbolOp::Edit(Edit::GlueTilesAroundEdge(edge)))
        }
        Action::GlueVertex { input, vertex } => {
            (input, SymbolOp::Edit(Edit::GlueTilesAroundVertex(vertex)))
        }
        Action::Truncate { input, vertex } => {
            (input, SymbolOp::Edit(Edit::TruncateVertex(vertex)))
        }
        Action::Break {
            input,
            mode,
            max_results,
            prune_names,
        } => (
            input,
            SymbolOp::Break(commands::break_cfg(mode.into(), max_results, prune_names)),
        ),
    };

    let source = match (&input.symbol, &input.file) {
        (Some(text), _) => Source::Text(text),
        (None, Some(path)) => Source::File(path),
        (None, None) => anyhow::bail!("pass --symbol or --file"),
    };
    let symbols = commands::load_symbols(source)?;
    let report = commands::run_symbol_op(&op, &symbols);
    let params = json!({
        "command": op.name(),
        "symbol": input.symbol,
        "file": input.file.as_ref().map(|p| p.display().to_string()),
        "op": format!("{op:?}"),
    });
    emit(&report, cmd.out.as_deref(), params)
}

/// Print the report and, with `--out`, write it as JSON plus a sidecar.
fn emit(report: &Report, out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    println!("{report}");
    let Some(out_path) = out else {
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let sidecar = provenance::write_sidecar(out_path, provenance::Payload::new(params))?;
    tracing::info!(out = %out_path.display(), sidecar = %sidecar.display(), "wrote artifact");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": dsymbol::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsymbol::api::catalog;
    use tempfile::tempdir;

    #[test]
    fn emit_writes_artifact_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("info.json");
        let report = commands::run_symbol_op(&SymbolOp::Info, &[catalog::cube()]);
        emit(&report, Some(out.as_path()), json!({"command": "info"})).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["command"], "info");
        assert_eq!(parsed["entries"][0]["output"]["orbifold"], "*432");
        assert!(dir.path().join("runs").join("info.provenance.json").exists());
    }

    #[test]
    fn cli_parses_break_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "break", "--symbol", "<1.1:2:2,2,2:6,3>", "--mode", "some", "--prune-names",
        ])
        .unwrap();
        match cmd.action {
            Action::Break { mode, prune_names, max_results, .. } => {
                assert!(matches!(BreakMode::from(mode), BreakMode::RemoveSome));
                assert!(prune_names);
                assert_eq!(max_results, 32);
            }
            _ => panic!("expected break"),
        }
        assert!(Cmd::try_parse_from(["cli", "info"]).is_err());
    }
}
