//! Walk through the catalog and a few edits, printing symbols with their names.
//!
//! Usage:
//!   cargo run -p dsymbol --example surgery_tour
//!   cargo run -p dsymbol --example surgery_tour -- random
//!
//! Default mode truncates and contracts the tetrahedron and breaks the
//! hexagonal lattice; `random` prints a few random symbols instead.

use dsymbol::edit::{break_symmetries, contract_edge, truncate_vertex, BreakCfg, BreakMode};
use dsymbol::orbifold::group_name;
use dsymbol::random::{draw_symbols, RandomSymbolCfg};
use dsymbol::symbol::{catalog, DSymbol};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "tour".to_string());
    match mode.as_str() {
        "tour" => tour(),
        "random" => random(),
        _ => eprintln!("usage: surgery_tour [tour|random]"),
    }
}

fn show(label: &str, ds: &DSymbol) {
    println!(
        "{label:<24} {ds}  name={} curvature={} geometry={}",
        group_name(ds),
        ds.curvature(),
        ds.geometry()
    );
}

fn tour() {
    for ds in catalog::all() {
        show("catalog", &ds);
    }
    let tet = catalog::tetrahedron();
    let Some(t) = truncate_vertex(&tet, 1) else {
        return;
    };
    show("truncated tetrahedron", &t);
    if let Some(c) = contract_edge(&t, 1) {
        show("contracted edge 1", &c);
    }
    let hex = catalog::hexagonal_lattice();
    let oriented = dsymbol::algorithms::orientate(&hex);
    show("oriented hexagonal", &oriented);
    let cfg = BreakCfg {
        mode: BreakMode::RemoveSome,
        max_results: 6,
        prune_repeated_names: true,
    };
    for (k, ds) in break_symmetries(&oriented, &cfg).iter().enumerate() {
        show(&format!("subgroup {k}"), ds);
    }
}

fn random() {
    for (k, ds) in draw_symbols(&RandomSymbolCfg::default(), 2025, 5).iter().enumerate() {
        show(&format!("random sample {k}"), ds);
    }
}
