//! Text format `<NR1.NR2:SIZE:s0,s1,s2:m01,m12>`.
//!
//! - Involution lists: for each `i`, flags are scanned in increasing order and
//!   every flag not yet paired contributes one entry `s_i(a)` (1-based), which
//!   pairs both `a` and `s_i(a)`.
//! - Branching lists: one value per `{0,1}`-orbit, then one per `{1,2}`-orbit,
//!   orbits in increasing order of their smallest flag. `m02` is implicit.
//! - The size field may carry a dimension (`SIZE DIM`); only 2 is accepted.

use std::fmt;
use std::str::FromStr;

use super::types::{DSymbol, Flag};
use crate::error::DsError;

impl DSymbol {
    /// Read one symbol from a line.
    ///
    /// `Ok(None)` when the line is not a symbol at all (does not start with `<`).
    pub fn read(line: &str) -> Result<Option<DSymbol>, DsError> {
        let line = line.trim();
        if !line.starts_with('<') {
            return Ok(None);
        }
        parse_symbol(line).map(Some)
    }

    /// Write the single-line text form.
    pub fn write(&self) -> String {
        self.to_string()
    }
}

impl FromStr for DSymbol {
    type Err = DsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DSymbol::read(s)?.ok_or(DsError::NoSymbol)
    }
}

impl fmt::Display for DSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}.{}:{}:", self.nr1, self.nr2, self.size())?;
        for i in 0..3 {
            if i > 0 {
                f.write_str(",")?;
            }
            let mut seen = vec![false; self.size()];
            let mut first = true;
            for a in self.flags() {
                if seen[a] {
                    continue;
                }
                let b = self.s(i, a);
                seen[a] = true;
                seen[b] = true;
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{}", b + 1)?;
            }
        }
        f.write_str(":")?;
        for (k, (i, j)) in [(0usize, 1usize), (1, 2)].into_iter().enumerate() {
            if k > 0 {
                f.write_str(",")?;
            }
            let values: Vec<String> = self
                .orbits(i, j)
                .map(|a| self.m(i, j, a).to_string())
                .collect();
            f.write_str(&values.join(" "))?;
        }
        f.write_str(">")
    }
}

/// Every symbol in a multi-line text, skipping lines that are not symbols.
///
/// Parse failures carry the 1-based line number.
pub fn read_symbols(text: &str) -> impl Iterator<Item = Result<DSymbol, DsError>> + '_ {
    text.lines().enumerate().filter_map(|(k, line)| {
        DSymbol::read(line)
            .map_err(|e| match e {
                DsError::Parse { reason } => DsError::parse(format!("line {}: {reason}", k + 1)),
                DsError::Inconsistent { reason } => {
                    DsError::inconsistent(format!("line {}: {reason}", k + 1))
                }
                other => other,
            })
            .transpose()
    })
}

fn parse_symbol(line: &str) -> Result<DSymbol, DsError> {
    // Anything after the first '>' is trailing text, not part of the symbol.
    let (body, _) = line
        .strip_prefix('<')
        .ok_or(DsError::NoSymbol)?
        .split_once('>')
        .ok_or_else(|| DsError::parse("missing closing '>'"))?;
    let fields: Vec<&str> = body.split(':').collect();
    if fields.len() != 4 {
        return Err(DsError::parse(format!(
            "expected 4 ':'-separated fields, found {}",
            fields.len()
        )));
    }

    let (nr1, nr2) = parse_nr(fields[0])?;
    let size = parse_size(fields[1])?;

    let mut ds = DSymbol::new(size);
    ds.set_nr(nr1, nr2);

    let lists: Vec<&str> = fields[2].split(',').collect();
    if lists.len() != 3 {
        return Err(DsError::parse(format!(
            "expected 3 involution lists, found {}",
            lists.len()
        )));
    }
    for (i, list) in lists.iter().enumerate() {
        read_involution(&mut ds, i, list)?;
    }

    let lists: Vec<&str> = fields[3].split(',').collect();
    if lists.len() != 2 {
        return Err(DsError::parse(format!(
            "expected 2 branching lists, found {}",
            lists.len()
        )));
    }
    read_branching(&mut ds, 0, 1, lists[0])?;
    read_branching(&mut ds, 1, 2, lists[1])?;

    ds.validate()?;
    Ok(ds)
}

fn parse_usize(tok: &str) -> Result<usize, DsError> {
    tok.parse::<usize>()
        .map_err(|_| DsError::parse(format!("bad integer '{tok}'")))
}

fn parse_nr(field: &str) -> Result<(usize, usize), DsError> {
    let toks: Vec<&str> = field.split('.').map(str::trim).collect();
    match toks.as_slice() {
        [a, b] => Ok((parse_usize(a)?, parse_usize(b)?)),
        _ => Err(DsError::parse(format!("bad NR1.NR2 field '{field}'"))),
    }
}

fn parse_size(field: &str) -> Result<usize, DsError> {
    let toks: Vec<&str> = field.split_whitespace().collect();
    match toks.as_slice() {
        [size] => parse_usize(size),
        [size, dim] => {
            let dim = parse_usize(dim)?;
            if dim != 2 {
                return Err(DsError::UnsupportedDimension(dim));
            }
            parse_usize(size)
        }
        _ => Err(DsError::parse(format!("bad size field '{field}'"))),
    }
}

fn read_involution(ds: &mut DSymbol, i: usize, list: &str) -> Result<(), DsError> {
    let n = ds.size();
    let mut assigned: Vec<Option<Flag>> = vec![None; n];
    let mut toks = list.split_whitespace();
    for a in 0..n {
        if assigned[a].is_some() {
            continue;
        }
        let tok = toks
            .next()
            .ok_or_else(|| DsError::parse(format!("s{i} list is too short")))?;
        let b1 = parse_usize(tok)?;
        if b1 == 0 || b1 > n {
            return Err(DsError::parse(format!("s{i} entry {b1} outside 1..={n}")));
        }
        let b = b1 - 1;
        if b != a && assigned[b].is_some() {
            return Err(DsError::parse(format!(
                "s{i} entry {b1} is already paired"
            )));
        }
        assigned[a] = Some(b);
        assigned[b] = Some(a);
        ds.set_s(i, a, b);
    }
    if toks.next().is_some() {
        return Err(DsError::parse(format!("s{i} list is too long")));
    }
    Ok(())
}

fn read_branching(ds: &mut DSymbol, i: usize, j: usize, list: &str) -> Result<(), DsError> {
    let reps: Vec<Flag> = ds.orbits(i, j).collect();
    let mut toks = list.split_whitespace();
    for a in reps {
        let tok = toks
            .next()
            .ok_or_else(|| DsError::parse(format!("m{i}{j} list is too short")))?;
        let m = parse_usize(tok)?;
        ds.set_m(i, j, a, m);
    }
    if toks.next().is_some() {
        return Err(DsError::parse(format!("m{i}{j} list is too long")));
    }
    Ok(())
}
