//! Subcommand bodies: read symbols, run one library call per symbol, collect a
//! serializable report.

use anyhow::{Context, Result};
use dsymbol::api::{
    all_tiles_are_disks, break_symmetries, draw_symbols, dualize, group_name, is_maximal_symmetry,
    is_simple_tiling, isomorphic, max_symmetry, orientate, read_symbols, reorder, BreakCfg,
    BreakMode, DSymbol, Edit, RandomSymbolCfg, SymmetryClass,
};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Every invariant `info` reports.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SymbolInfo {
    pub size: usize,
    pub tiles: usize,
    pub edges: usize,
    pub vertices: usize,
    pub euler_characteristic: i64,
    pub orientation: String,
    pub curvature: String,
    pub geometry: String,
    pub orbifold: String,
    pub symmetry_class: String,
    pub maximal_symmetry: bool,
    pub tiles_are_disks: bool,
    pub simple_tiling: bool,
}

impl SymbolInfo {
    pub fn of(ds: &DSymbol) -> Self {
        let (tiles, edges, vertices) = ds.counts();
        Self {
            size: ds.size(),
            tiles,
            edges,
            vertices,
            euler_characteristic: ds.euler_characteristic(),
            orientation: format!("{:?}", ds.orientation()),
            curvature: ds.curvature().to_string(),
            geometry: ds.geometry().to_string(),
            orbifold: group_name(ds),
            symmetry_class: SymmetryClass::of(ds).to_string(),
            maximal_symmetry: is_maximal_symmetry(ds),
            tiles_are_disks: all_tiles_are_disks(ds),
            simple_tiling: is_simple_tiling(ds),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Output {
    Info(SymbolInfo),
    Symbols(Vec<String>),
    Flag(bool),
    NotApplicable,
}

impl Output {
    fn from_symbols(symbols: Vec<DSymbol>) -> Self {
        if symbols.is_empty() {
            Output::NotApplicable
        } else {
            Output::Symbols(symbols.iter().map(DSymbol::write).collect())
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Info(info) => {
                writeln!(f, "size: {}", info.size)?;
                writeln!(
                    f,
                    "tiles/edges/vertices: {}/{}/{}",
                    info.tiles, info.edges, info.vertices
                )?;
                writeln!(f, "euler characteristic: {}", info.euler_characteristic)?;
                writeln!(f, "orientation: {}", info.orientation)?;
                writeln!(f, "curvature: {} ({})", info.curvature, info.geometry)?;
                writeln!(f, "orbifold: {}", info.orbifold)?;
                writeln!(f, "symmetry class: {}", info.symmetry_class)?;
                writeln!(f, "maximal symmetry: {}", info.maximal_symmetry)?;
                writeln!(f, "tiles are disks: {}", info.tiles_are_disks)?;
                write!(f, "simple tiling: {}", info.simple_tiling)
            }
            Output::Symbols(list) => write!(f, "{}", list.join("\n")),
            Output::Flag(b) => write!(f, "{b}"),
            Output::NotApplicable => f.write_str("not applicable"),
        }
    }
}

/// One input symbol and what the command made of it.
#[derive(Clone, Debug, Serialize)]
pub struct Entry {
    pub input: Option<String>,
    pub output: Output,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub command: String,
    pub entries: Vec<Entry>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, e) in self.entries.iter().enumerate() {
            if k > 0 {
                writeln!(f)?;
            }
            if self.entries.len() > 1 {
                if let Some(input) = &e.input {
                    writeln!(f, "# {input}")?;
                }
            }
            write!(f, "{}", e.output)?;
        }
        Ok(())
    }
}

/// A per-symbol operation.
#[derive(Clone, Debug)]
pub enum SymbolOp {
    Info,
    Dual,
    Orient,
    MaxSym,
    Reorder,
    Iso { other: DSymbol, sets_only: bool },
    Edit(Edit),
    Break(BreakCfg),
}

impl SymbolOp {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolOp::Info => "info",
            SymbolOp::Dual => "dual",
            SymbolOp::Orient => "orient",
            SymbolOp::MaxSym => "maxsym",
            SymbolOp::Reorder => "reorder",
            SymbolOp::Iso { .. } => "iso",
            SymbolOp::Edit(Edit::ContractEdge(_)) => "contract",
            SymbolOp::Edit(Edit::GlueTilesAroundEdge(_)) => "glue-edge",
            SymbolOp::Edit(Edit::GlueTilesAroundVertex(_)) => "glue-vertex",
            SymbolOp::Edit(Edit::TruncateVertex(_)) => "truncate",
            SymbolOp::Break(_) => "break",
        }
    }

    pub fn apply(&self, ds: &DSymbol) -> Output {
        match self {
            SymbolOp::Info => Output::Info(SymbolInfo::of(ds)),
            SymbolOp::Dual => Output::from_symbols(vec![dualize(ds)]),
            SymbolOp::Orient => Output::from_symbols(vec![orientate(ds)]),
            SymbolOp::MaxSym => Output::from_symbols(vec![max_symmetry(ds)]),
            SymbolOp::Reorder => Output::from_symbols(vec![reorder(ds)]),
            SymbolOp::Iso { other, sets_only } => Output::Flag(isomorphic(ds, other, *sets_only)),
            SymbolOp::Edit(edit) => Output::from_symbols(edit.apply(ds).into_iter().collect()),
            SymbolOp::Break(cfg) => Output::from_symbols(break_symmetries(ds, cfg)),
        }
    }
}

/// Where the input symbols come from.
#[derive(Clone, Debug)]
pub enum Source<'a> {
    Text(&'a str),
    File(&'a Path),
}

pub fn load_symbols(source: Source<'_>) -> Result<Vec<DSymbol>> {
    let (text, origin) = match source {
        Source::Text(t) => (t.to_string(), "--symbol".to_string()),
        Source::File(p) => (
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
            p.display().to_string(),
        ),
    };
    let symbols = read_symbols(&text)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing symbols from {origin}"))?;
    anyhow::ensure!(!symbols.is_empty(), "no D-symbol found in {origin}");
    Ok(symbols)
}

pub fn run_symbol_op(op: &SymbolOp, symbols: &[DSymbol]) -> Report {
    let entries = symbols
        .iter()
        .map(|ds| {
            let output = op.apply(ds);
            tracing::info!(op = op.name(), input = %ds, "done");
            Entry {
                input: Some(ds.write()),
                output,
            }
        })
        .collect();
    Report {
        command: op.name().to_string(),
        entries,
    }
}

pub fn run_random(cfg: &RandomSymbolCfg, seed: u64, count: usize) -> Report {
    let symbols = draw_symbols(cfg, seed, count);
    tracing::info!(seed, count, drawn = symbols.len(), "random");
    Report {
        command: "random".to_string(),
        entries: vec![Entry {
            input: None,
            output: Output::from_symbols(symbols),
        }],
    }
}

pub fn break_cfg(mode: BreakMode, max_results: usize, prune_names: bool) -> BreakCfg {
    BreakCfg {
        mode,
        max_results,
        prune_repeated_names: prune_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsymbol::api::catalog;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn info_on_tetrahedron() {
        let info = SymbolInfo::of(&catalog::tetrahedron());
        assert_eq!(info.size, 1);
        assert_eq!(info.orbifold, "*332");
        assert_eq!(info.curvature, "1/6");
        assert_eq!(info.geometry, "Spherical");
        assert_eq!(info.orientation, "Bordered");
        assert!(info.maximal_symmetry);
    }

    #[test]
    fn edits_report_not_applicable() {
        let tet = catalog::tetrahedron();
        let report = run_symbol_op(&SymbolOp::Edit(Edit::ContractEdge(1)), &[tet.clone()]);
        assert_eq!(report.entries[0].output, Output::NotApplicable);
        assert_eq!(report.to_string(), "not applicable");

        let report = run_symbol_op(&SymbolOp::Edit(Edit::TruncateVertex(1)), &[tet]);
        assert_eq!(report.to_string(), "<1.1:3:1 2 3,2 3,1 3:6 3,3>");
        assert_eq!(report.command, "truncate");
    }

    #[test]
    fn load_symbols_from_file_skips_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.ds");
        fs::write(&path, "# tetrahedron and cube\n<1.1:1:1,1,1:3,3>\n\n<1.1:1:1,1,1:4,3>\n").unwrap();
        let symbols = load_symbols(Source::File(&path)).unwrap();
        assert_eq!(symbols.len(), 2);
        let report = run_symbol_op(&SymbolOp::Dual, &symbols);
        assert_eq!(
            report.to_string(),
            "# <1.1:1:1,1,1:3,3>\n<1.1:1:1,1,1:3,3>\n# <1.1:1:1,1,1:4,3>\n<1.1:1:1,1,1:3,4>"
        );
    }

    #[test]
    fn load_symbols_reports_errors() {
        assert!(load_symbols(Source::Text("no symbol here")).is_err());
        assert!(load_symbols(Source::Text("<1.1:2:1,1,1:3,3>")).is_err());
        let dir = tempdir().unwrap();
        assert!(load_symbols(Source::File(&dir.path().join("missing.ds"))).is_err());
    }

    #[test]
    fn report_serializes_untagged_outputs() {
        let report = run_symbol_op(
            &SymbolOp::Iso {
                other: catalog::cube(),
                sets_only: true,
            },
            &[catalog::octahedron()],
        );
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["command"], "iso");
        assert_eq!(v["entries"][0]["output"], true);
        let random = run_random(&RandomSymbolCfg::default(), 1, 3);
        let v = serde_json::to_value(&random).unwrap();
        assert_eq!(v["entries"][0]["output"].as_array().unwrap().len(), 3);
    }
}
