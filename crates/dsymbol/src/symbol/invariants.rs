//! Topological invariants and structural validation.

use super::types::{DSymbol, Flag, Geometry, Orientation, ORBIT_PAIRS};
use crate::error::DsError;
use crate::rational::Rational;

impl DSymbol {
    /// Euler characteristic of the barycentric subdivision:
    /// `size + #orbits(0,1) + #orbits(0,2) + #orbits(1,2) - Σ_i #s_i-orbits`.
    pub fn euler_characteristic(&self) -> i64 {
        let mut chi = self.size() as i64;
        for (i, j) in ORBIT_PAIRS {
            chi += self.orbit_count(i, j) as i64;
        }
        for i in 0..3 {
            // s_i-orbits are pairs {a, s_i a} and fixed points.
            let pairs = self.flags().filter(|&a| a <= self.s(i, a)).count();
            chi -= pairs as i64;
        }
        chi
    }

    /// 2-color the flags so that `s_i` always changes the color.
    ///
    /// Returns the verdict and the coloring (`1`/`-1` on every flag). The coloring
    /// always comes from a spanning tree of the walk, so on a non-orientable symbol
    /// some steps keep their color. The walk starts at flag 0 with color 1 and uses
    /// an explicit stack.
    pub fn compute_orientation(&self) -> (Orientation, Vec<i8>) {
        let n = self.size();
        let mut ori = vec![0i8; n];
        if n == 0 {
            return (Orientation::Orientable, ori);
        }
        let mut bordered = false;
        let mut twisted = false;
        ori[0] = 1;
        let mut stack: Vec<Flag> = vec![0];
        while let Some(a) = stack.pop() {
            for i in 0..3 {
                let b = self.s(i, a);
                if ori[b] == 0 {
                    ori[b] = -ori[a];
                    stack.push(b);
                } else if ori[b] == ori[a] {
                    if a == b {
                        bordered = true;
                    } else {
                        twisted = true;
                    }
                }
            }
        }
        let verdict = if twisted {
            Orientation::NonOrientable
        } else if bordered {
            Orientation::Bordered
        } else {
            Orientation::Orientable
        };
        (verdict, ori)
    }

    pub fn orientation(&self) -> Orientation {
        self.compute_orientation().0
    }

    /// `-size/2 + Σ_a (1/m01(a) + 1/m12(a))`.
    pub fn curvature(&self) -> Rational {
        let mut k = Rational::new(-(self.size() as i64), 2);
        for a in self.flags() {
            k = k + Rational::new(1, self.m01[a] as i64) + Rational::new(1, self.m12[a] as i64);
        }
        k
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::from_curvature(self.curvature())
    }

    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.size()];
        seen[0] = true;
        let mut stack = vec![0];
        let mut count = 1;
        while let Some(a) = stack.pop() {
            for i in 0..3 {
                let b = self.s(i, a);
                if !seen[b] {
                    seen[b] = true;
                    count += 1;
                    stack.push(b);
                }
            }
        }
        count == self.size()
    }

    /// Check every structural invariant and report the first violation.
    ///
    /// Covers involutions (`s_i(s_i(a)) == a`), branching values (positive,
    /// constant on orbits, multiples of the orbit length) and connectivity. All
    /// other methods assume a symbol that passes this check.
    pub fn validate(&self) -> Result<(), DsError> {
        let n = self.size();
        for i in 0..3 {
            if self.ops[i].len() != n || self.m12.len() != n || self.m01.len() != n {
                return Err(DsError::inconsistent("array lengths disagree"));
            }
            for a in 0..n {
                let b = self.ops[i][a];
                if b >= n || self.ops[i][b] != a {
                    return Err(DsError::inconsistent(format!(
                        "s{i} is not an involution at flag {}",
                        a + 1
                    )));
                }
            }
        }
        for (i, j) in [(0usize, 1usize), (1, 2), (0, 2)] {
            let mut visited = vec![false; n];
            for a in 0..n {
                if visited[a] {
                    continue;
                }
                let m = self.m(i, j, a);
                if m == 0 {
                    return Err(DsError::inconsistent(format!(
                        "m{i}{j} is zero at flag {}",
                        a + 1
                    )));
                }
                let flags = self.orbit_flags(i, j, a);
                for &b in &flags {
                    visited[b] = true;
                    if self.m(i, j, b) != m {
                        return Err(DsError::inconsistent(format!(
                            "m{i}{j} not constant on the orbit of flag {}",
                            a + 1
                        )));
                    }
                }
                let r = self.orbit_length(i, j, a);
                if m % r != 0 {
                    return Err(DsError::inconsistent(format!(
                        "m{i}{j}={m} is not a multiple of orbit length {r} at flag {}",
                        a + 1
                    )));
                }
            }
        }
        if !self.is_connected() {
            return Err(DsError::inconsistent("flags are not connected"));
        }
        Ok(())
    }
}
