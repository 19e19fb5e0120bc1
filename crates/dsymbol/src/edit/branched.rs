//! Cyclic covers branched over several orbits at once.
//!
//! A cover of prime degree `p` of an oriented symbol is given by a voltage in
//! `Z_p` on each step `x -> s_k(x)` that leaves a flag of colour `+1`. Walking
//! once around an `{i,j}`-orbit adds up a loop voltage. Where the loop voltage
//! is non-zero the branching number of the orbit drops by a factor `p`; where it
//! is zero the orbit splits into `p` copies. The cover is a symbol iff every
//! orbit whose branching number is prime to `p` has loop voltage zero, so the
//! admissible voltages are the null space of a linear system over `Z_p`.

use crate::symbol::{DSymbol, Flag, Orientation, ORBIT_PAIRS};

/// Covers of prime degree that branch over at least one rotation orbit, one per
/// orbit and prime factor of its branching number.
pub(super) fn branched_covers(ds: &DSymbol) -> Vec<DSymbol> {
    let (orientation, colour) = ds.compute_orientation();
    if orientation != Orientation::Orientable {
        return Vec::new();
    }
    let steps = Steps::new(ds, &colour);
    let loops: Vec<Loop> = ORBIT_PAIRS
        .iter()
        .flat_map(|&(i, j)| ds.orbits(i, j).map(move |a| (i, j, a)))
        .map(|(i, j, a)| steps.walk_loop(ds, i, j, a))
        .collect();

    let mut out = Vec::new();
    for (t, target) in loops.iter().enumerate() {
        for p in prime_factors(target.v) {
            if let Some(volt) = solve(&loops, t, p, steps.len()) {
                tracing::trace!(flag = target.rep + 1, p, "branched cover");
                let cover = steps.cover(ds, &volt, p);
                if cover.validate().is_ok() {
                    out.push(cover);
                }
            }
        }
    }
    out
}

/// The steps that carry a voltage, numbered.
struct Steps {
    slot: [Vec<Option<usize>>; 3],
    count: usize,
}

struct Loop {
    rep: Flag,
    v: usize,
    /// Coefficient of each step's voltage in the loop voltage.
    form: Vec<i64>,
}

impl Steps {
    fn new(ds: &DSymbol, colour: &[i8]) -> Self {
        let mut slot = [vec![None; ds.size()], vec![None; ds.size()], vec![None; ds.size()]];
        let mut count = 0;
        for (k, row) in slot.iter_mut().enumerate() {
            for x in ds.flags().filter(|&x| colour[x] > 0) {
                debug_assert_ne!(ds.s(k, x), x);
                row[x] = Some(count);
                count += 1;
            }
        }
        Self { slot, count }
    }

    fn len(&self) -> usize {
        self.count
    }

    fn walk_loop(&self, ds: &DSymbol, i: usize, j: usize, a: Flag) -> Loop {
        let mut form = vec![0; self.count];
        let start = ds
            .orbit_flags(i, j, a)
            .into_iter()
            .find(|&x| self.slot[i][x].is_some())
            .unwrap_or(a);
        let (mut x, mut k) = (start, i);
        loop {
            let y = ds.s(k, x);
            match (self.slot[k][x], self.slot[k][y]) {
                (Some(s), _) => form[s] += 1,
                (None, Some(s)) => form[s] -= 1,
                (None, None) => {}
            }
            x = y;
            k = if k == i { j } else { i };
            if x == start && k == i {
                break;
            }
        }
        Loop {
            rep: a,
            v: ds.v(i, j, a),
            form,
        }
    }

    /// `p` copies of `ds`; the step `x -> s_k(x)` of copy `c` lands in copy
    /// `c + volt (mod p)`.
    fn cover(&self, ds: &DSymbol, volt: &[u64], p: usize) -> DSymbol {
        let n = ds.size();
        let mut out = ds.clone();
        for _ in 1..p {
            out.append(ds);
        }
        for (k, row) in self.slot.iter().enumerate() {
            for (x, s) in row.iter().enumerate() {
                let Some(s) = *s else { continue };
                let y = ds.s(k, x);
                for c in 0..p {
                    let c2 = (c + volt[s] as usize) % p;
                    out.ops[k][x + c * n] = y + c2 * n;
                    out.ops[k][y + c2 * n] = x + c * n;
                }
            }
        }
        out
    }
}

/// Voltages mod `p` that keep every loop of branching number prime to `p`
/// closed and open the loop `target`, opening as many others as a greedy pass
/// over a null space basis finds.
fn solve(loops: &[Loop], target: usize, p: usize, vars: usize) -> Option<Vec<u64>> {
    let q = p as u64;
    let residue = |c: i64| c.rem_euclid(p as i64) as u64;
    let closed: Vec<Vec<u64>> = loops
        .iter()
        .filter(|l| l.v % p != 0)
        .map(|l| l.form.iter().map(|&c| residue(c)).collect())
        .collect();
    let open: Vec<usize> = (0..loops.len()).filter(|&t| loops[t].v % p == 0).collect();
    let basis = null_space(closed, vars, q);

    // Loop voltages of each basis vector on the loops that may open.
    let value = |w: &[u64], t: usize| -> u64 {
        loops[t]
            .form
            .iter()
            .zip(w)
            .fold(0, |acc, (&c, &x)| (acc + residue(c) * x) % q)
    };
    let mut volt = vec![0u64; vars];
    let mut current: Vec<u64> = vec![0; open.len()];
    let score = |vals: &[u64]| {
        let hit = open
            .iter()
            .zip(vals)
            .any(|(&t, &x)| t == target && x != 0);
        (hit, vals.iter().filter(|&&x| x != 0).count())
    };
    for b in &basis {
        let delta: Vec<u64> = open.iter().map(|&t| value(b, t)).collect();
        let mut best = (score(&current[..]), 0);
        for c in 1..q {
            let trial: Vec<u64> = current
                .iter()
                .zip(&delta)
                .map(|(&x, &d)| (x + c * d) % q)
                .collect();
            let s = score(&trial[..]);
            if s > best.0 {
                best = (s, c);
            }
        }
        let c = best.1;
        if c != 0 {
            for (x, &d) in current.iter_mut().zip(&delta) {
                *x = (*x + c * d) % q;
            }
            for (w, &y) in volt.iter_mut().zip(b) {
                *w = (*w + c * y) % q;
            }
        }
    }
    score(&current[..]).0.then_some(volt)
}

/// A basis of `{w : rows · w = 0}` over `Z_q`, `q` prime.
fn null_space(mut rows: Vec<Vec<u64>>, vars: usize, q: u64) -> Vec<Vec<u64>> {
    let mut pivots = Vec::new();
    let mut r = 0;
    for c in 0..vars {
        if r == rows.len() {
            break;
        }
        let Some(pr) = (r..rows.len()).find(|&t| rows[t][c] != 0) else {
            continue;
        };
        rows.swap(r, pr);
        let inv = pow_mod(rows[r][c], q - 2, q);
        for e in rows[r].iter_mut() {
            *e = *e * inv % q;
        }
        let pivot = rows[r].clone();
        for (t, row) in rows.iter_mut().enumerate() {
            let f = row[c];
            if t != r && f != 0 {
                for (e, &g) in row.iter_mut().zip(&pivot) {
                    *e = (*e + (q - f) * g) % q;
                }
            }
        }
        pivots.push(c);
        r += 1;
    }
    let mut is_pivot = vec![false; vars];
    for &c in &pivots {
        is_pivot[c] = true;
    }
    (0..vars)
        .filter(|&f| !is_pivot[f])
        .map(|f| {
            let mut w = vec![0; vars];
            w[f] = 1;
            for (t, &c) in pivots.iter().enumerate() {
                w[c] = (q - rows[t][f]) % q;
            }
            w
        })
        .collect()
}

fn pow_mod(mut b: u64, mut e: u64, q: u64) -> u64 {
    let mut acc = 1 % q;
    b %= q;
    while e > 0 {
        if e & 1 == 1 {
            acc = acc * b % q;
        }
        b = b * b % q;
        e >>= 1;
    }
    acc
}

fn prime_factors(mut v: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut p = 2;
    while p * p <= v {
        if v % p == 0 {
            out.push(p);
            while v % p == 0 {
                v /= p;
            }
        }
        p += 1;
    }
    if v > 1 {
        out.push(v);
    }
    out
}
