//! Disk tests for tiles and pairs of tiles.
//!
//! Both tests look at the tiling, not at the symbol: two corners of a tile may
//! lie over the same vertex orbit without being the same vertex. A patch of the
//! universal cover is therefore developed around one tile of each type, by coset
//! enumeration over the chamber relations `(s_i s_j)^m_ij = 1`. Chambers are
//! defined breadth first from an explicit worklist and merged through a
//! union-find whenever a relation closes, so the patch never identifies two
//! chambers that are distinct in the tiling. A patch holds at most
//! [`COVER_BUDGET`] chambers; on a spherical symbol it closes up completely.
//!
//! - A vertex is a bottleneck of a tile when its star meets the tile at more than
//!   one corner. A tile is a disk iff it has no bottleneck.
//! - An island of two touching tiles is a component of the remaining chambers
//!   that closes up inside the patch. Extracted as a symbol of its own, with its
//!   shore as a mirror, it is a disk (`1*`). A tiling is simple iff its tiles are
//!   disks and no two touching tiles cut off an island.

use crate::orbifold::group_name;
use crate::symbol::{DSymbol, Flag, ORBIT_PAIRS};

/// Largest number of chambers developed around a single tile.
pub const COVER_BUDGET: usize = 1 << 12;

/// `true` iff every tile of the tiling is a closed disk: no tile meets itself at
/// a vertex or along an edge.
pub fn all_tiles_are_disks(ds: &DSymbol) -> bool {
    ds.orbits(0, 1).all(|a| {
        let dev = Development::around(ds, a, COVER_BUDGET);
        let tile = dev.cycle(0, 0, 1);
        match dev.bottleneck(&tile) {
            Some(x) => {
                tracing::debug!(tile = a + 1, vertex = dev.flag[x] + 1, "tile touches itself");
                false
            }
            None => true,
        }
    })
}

/// `true` iff every tile is a disk and any two tiles meet in a connected set, so
/// that no pair of tiles encloses an island.
pub fn is_simple_tiling(ds: &DSymbol) -> bool {
    if !all_tiles_are_disks(ds) {
        return false;
    }
    ds.orbits(0, 1).all(|a| {
        let dev = Development::around(ds, a, COVER_BUDGET);
        let tile = dev.cycle(0, 0, 1);
        let in_tile = dev.mask(&tile);
        let mut done = in_tile.clone();
        for &x in &tile {
            for y in dev.cycle(x, 1, 2) {
                if done[y] {
                    continue;
                }
                let mut cut = in_tile.clone();
                for z in dev.cycle(y, 0, 1) {
                    done[z] = true;
                    cut[z] = true;
                }
                let enclosed = dev
                    .islands(&cut)
                    .into_iter()
                    .find(|island| group_name(&dev.island_symbol(island)) == "1*");
                if let Some(island) = enclosed {
                    tracing::debug!(
                        tile = a + 1,
                        other = dev.flag[y] + 1,
                        chambers = island.len(),
                        "two tiles enclose an island"
                    );
                    return false;
                }
            }
        }
        true
    })
}

type Chamber = usize;

/// A patch of the universal cover. Every chamber lies over a flag of the symbol.
struct Development<'a> {
    ds: &'a DSymbol,
    flag: Vec<Flag>,
    next: Vec<[Option<Chamber>; 3]>,
    parent: Vec<Chamber>,
    /// Chambers below this index have all their relations closed.
    settled: usize,
}

impl<'a> Development<'a> {
    /// Develop the cover from a chamber over `start`, which becomes chamber 0.
    fn around(ds: &'a DSymbol, start: Flag, budget: usize) -> Self {
        let mut dev = Self {
            ds,
            flag: vec![start],
            next: vec![[None; 3]],
            parent: vec![0],
            settled: 0,
        };
        let mut k = 0;
        while k < dev.flag.len() {
            if dev.find(k) == k && !dev.close_relations(k, budget) {
                break;
            }
            k += 1;
        }
        dev.settled = k;
        tracing::trace!(
            flag = start + 1,
            chambers = dev.flag.len(),
            settled = k,
            "developed cover patch"
        );
        dev
    }

    fn len(&self) -> usize {
        self.flag.len()
    }

    fn find(&self, mut u: Chamber) -> Chamber {
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }

    fn step(&self, u: Chamber, i: usize) -> Option<Chamber> {
        self.next[u][i].map(|v| self.find(v))
    }

    fn define(&mut self, f: Chamber, i: usize) -> Chamber {
        let u = self.len();
        self.flag.push(self.ds.s(i, self.flag[f]));
        self.next.push([None; 3]);
        self.parent.push(u);
        self.next[f][i] = Some(u);
        self.next[u][i] = Some(f);
        u
    }

    /// Identify `a` with `b`, and every pair of neighbours this forces.
    fn merge(&mut self, a: Chamber, b: Chamber) {
        let mut pending = vec![(a, b)];
        while let Some((a, b)) = pending.pop() {
            let (a, b) = (self.find(a), self.find(b));
            if a == b {
                continue;
            }
            debug_assert_eq!(self.flag[a], self.flag[b]);
            let (keep, gone) = (a.min(b), a.max(b));
            self.parent[gone] = keep;
            for i in 0..3 {
                if let Some(x) = self.next[gone][i] {
                    match self.next[keep][i] {
                        Some(y) => pending.push((x, y)),
                        None => self.next[keep][i] = Some(x),
                    }
                }
            }
        }
    }

    /// Close the three relations at `u`, defining chambers where the walk runs
    /// out. `false` when the budget does not allow another chamber.
    fn close_relations(&mut self, u: Chamber, budget: usize) -> bool {
        for (i, j) in ORBIT_PAIRS {
            let letter = |t: usize| if t % 2 == 0 { i } else { j };
            loop {
                if self.find(u) != u {
                    return true;
                }
                let len = 2 * self.ds.m(i, j, self.flag[u]);
                let (mut f, mut fi) = (u, 0);
                while fi < len {
                    match self.step(f, letter(fi)) {
                        Some(g) => (f, fi) = (g, fi + 1),
                        None => break,
                    }
                }
                if fi == len {
                    self.merge(f, u);
                    break;
                }
                let (mut b, mut bi) = (u, len);
                while bi > fi {
                    match self.step(b, letter(bi - 1)) {
                        Some(g) => (b, bi) = (g, bi - 1),
                        None => break,
                    }
                }
                if bi == fi {
                    self.merge(f, b);
                    break;
                }
                if bi == fi + 1 {
                    debug_assert_ne!(f, b);
                    self.next[f][letter(fi)] = Some(b);
                    self.next[b][letter(fi)] = Some(f);
                    break;
                }
                if self.len() >= budget {
                    return false;
                }
                self.define(f, letter(fi));
            }
        }
        true
    }

    /// The `{i,j}`-cycle through `u` in walk order, as far as the patch reaches.
    fn cycle(&self, u: Chamber, i: usize, j: usize) -> Vec<Chamber> {
        let mut out = vec![u];
        let mut cur = u;
        let mut k = i;
        while let Some(c) = self.step(cur, k).filter(|&c| c != u) {
            out.push(c);
            cur = c;
            k = if k == i { j } else { i };
        }
        out
    }

    fn mask(&self, chambers: &[Chamber]) -> Vec<bool> {
        let mut out = vec![false; self.len()];
        for &c in chambers {
            out[c] = true;
        }
        out
    }

    /// A chamber of `tile` at a vertex whose star holds more than one corner of
    /// the tile.
    fn bottleneck(&self, tile: &[Chamber]) -> Option<Chamber> {
        let in_tile = self.mask(tile);
        tile.iter().copied().find(|&x| {
            self.cycle(x, 1, 2).into_iter().filter(|&y| in_tile[y]).count() > 2
        })
    }

    /// Components of the live chambers outside `cut` that close up inside the
    /// patch. When no component runs off the patch, the first one is the outside
    /// and is not an island.
    fn islands(&self, cut: &[bool]) -> Vec<Vec<Chamber>> {
        let mut seen = cut.to_vec();
        let mut closed = Vec::new();
        let mut open = false;
        for u in 0..self.len() {
            if seen[u] || self.find(u) != u {
                continue;
            }
            seen[u] = true;
            let mut stack = vec![u];
            let mut members = Vec::new();
            let mut sealed = true;
            while let Some(x) = stack.pop() {
                members.push(x);
                sealed &= x < self.settled;
                for i in 0..3 {
                    match self.step(x, i) {
                        None => sealed = false,
                        Some(y) if !seen[y] => {
                            seen[y] = true;
                            stack.push(y);
                        }
                        Some(_) => {}
                    }
                }
            }
            if sealed {
                closed.push(members);
            } else {
                open = true;
            }
        }
        if !open && !closed.is_empty() {
            closed.remove(0);
        }
        closed
    }

    /// `island` as a symbol of its own. Steps that leave it become fixed points
    /// and every orbit gets branching number 1.
    fn island_symbol(&self, island: &[Chamber]) -> DSymbol {
        let mut index = vec![None; self.len()];
        for (k, &u) in island.iter().enumerate() {
            index[u] = Some(k);
        }
        let mut out = DSymbol::new(island.len());
        for (k, &u) in island.iter().enumerate() {
            for i in 0..3 {
                if let Some(y) = self.step(u, i).and_then(|y| index[y]) {
                    out.ops[i][k] = y;
                }
            }
        }
        for (i, j) in [(0, 1), (1, 2)] {
            let reps: Vec<Flag> = out.orbits(i, j).collect();
            for a in reps {
                out.set_v(i, j, a, 1);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::catalog;

    #[test]
    fn spherical_patches_close_up() {
        let ds = catalog::cube();
        let dev = Development::around(&ds, 0, COVER_BUDGET);
        assert_eq!(dev.settled, dev.len());
        let live = (0..dev.len()).filter(|&u| dev.find(u) == u).count();
        assert_eq!(live, 48);
        let square = dev.cycle(0, 0, 1);
        assert_eq!(square.len(), 8);
        assert!(dev.bottleneck(&square).is_none());
    }

    #[test]
    fn euclidean_patches_stop_at_the_budget() {
        let ds = catalog::square_lattice();
        let dev = Development::around(&ds, 0, 256);
        assert!(dev.settled < dev.len());
        assert!(dev.len() <= 256);
        // The tile and its corner stars are complete well inside the budget.
        assert_eq!(dev.cycle(0, 0, 1).len(), 8);
        assert_eq!(dev.cycle(0, 1, 2).len(), 8);
    }
}
