//! Isomorphism test between two D-symbols.
//!
//! Symbols are connected, so a bijection is fixed by the image of flag 0. Every
//! candidate image is tried in turn and extended along `s0, s1, s2` with an
//! explicit worklist; the first contradiction rejects the candidate.

use crate::symbol::{DSymbol, Flag};

/// `true` iff some bijection maps every `s_i` of `a` onto `s_i` of `b` and, unless
/// `sets_only`, preserves `m01` and `m12` flag by flag.
pub fn isomorphic(a: &DSymbol, b: &DSymbol, sets_only: bool) -> bool {
    if a.size() != b.size() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.size()).any(|target| isomorphism_from(a, b, target, sets_only).is_some())
}

/// The isomorphism sending flag 0 of `a` to `target` in `b`, as a flag map.
pub fn isomorphism_from(
    a: &DSymbol,
    b: &DSymbol,
    target: Flag,
    sets_only: bool,
) -> Option<Vec<Flag>> {
    let n = a.size();
    if n != b.size() || target >= n {
        return None;
    }
    let mut map: Vec<Option<Flag>> = vec![None; n];
    let mut inverse: Vec<Option<Flag>> = vec![None; n];
    map[0] = Some(target);
    inverse[target] = Some(0);
    let mut stack = vec![0];
    while let Some(x) = stack.pop() {
        let y = map[x]?;
        if !sets_only && (a.m(0, 1, x) != b.m(0, 1, y) || a.m(1, 2, x) != b.m(1, 2, y)) {
            return None;
        }
        for i in 0..3 {
            let xx = a.s(i, x);
            let yy = b.s(i, y);
            match map[xx] {
                None => {
                    if inverse[yy].is_some() {
                        return None;
                    }
                    map[xx] = Some(yy);
                    inverse[yy] = Some(xx);
                    stack.push(xx);
                }
                Some(z) if z != yy => return None,
                Some(_) => {}
            }
        }
    }
    map.into_iter().collect()
}
