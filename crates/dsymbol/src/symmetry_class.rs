//! Coarse classification of a symmetry group read off its orbifold name.
//!
//! Three questions are asked of the name: does it contain a number (a cone or a
//! corner, hence rotations), a `*` (mirrors) or an `x` (glide reflections)?

use std::fmt;

use crate::symbol::DSymbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymmetryClass {
    Trivial,
    Rotations,
    Reflections,
    Glides,
    RotationsAndReflections,
    RotationsAndGlides,
    ReflectionsAndGlides,
    RotationsReflectionsAndGlides,
}

impl SymmetryClass {
    /// Classify an orbifold name such as `*632`, `4*2`, `22x` or `o`.
    pub fn from_name(name: &str) -> Self {
        let mut rotations = false;
        let mut reflections = false;
        let mut glides = false;
        let mut in_parens = false;
        for c in name.chars() {
            match c {
                '(' => in_parens = true,
                ')' => {
                    in_parens = false;
                    rotations = true;
                }
                '*' => reflections = true,
                'x' => glides = true,
                '2'..='9' if !in_parens => rotations = true,
                _ => {}
            }
        }
        match (rotations, reflections, glides) {
            (false, false, false) => SymmetryClass::Trivial,
            (true, false, false) => SymmetryClass::Rotations,
            (false, true, false) => SymmetryClass::Reflections,
            (false, false, true) => SymmetryClass::Glides,
            (true, true, false) => SymmetryClass::RotationsAndReflections,
            (true, false, true) => SymmetryClass::RotationsAndGlides,
            (false, true, true) => SymmetryClass::ReflectionsAndGlides,
            (true, true, true) => SymmetryClass::RotationsReflectionsAndGlides,
        }
    }

    pub fn of(ds: &DSymbol) -> Self {
        Self::from_name(&crate::orbifold::group_name(ds))
    }

    pub fn has_rotations(self) -> bool {
        matches!(
            self,
            SymmetryClass::Rotations
                | SymmetryClass::RotationsAndReflections
                | SymmetryClass::RotationsAndGlides
                | SymmetryClass::RotationsReflectionsAndGlides
        )
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymmetryClass::Trivial => "no symmetry besides translations",
            SymmetryClass::Rotations => "rotations",
            SymmetryClass::Reflections => "reflections",
            SymmetryClass::Glides => "glide reflections",
            SymmetryClass::RotationsAndReflections => "rotations and reflections",
            SymmetryClass::RotationsAndGlides => "rotations and glide reflections",
            SymmetryClass::ReflectionsAndGlides => "reflections and glide reflections",
            SymmetryClass::RotationsReflectionsAndGlides => {
                "rotations, reflections and glide reflections"
            }
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::catalog;

    #[test]
    fn classify_names() {
        assert_eq!(SymmetryClass::from_name("1"), SymmetryClass::Trivial);
        assert_eq!(SymmetryClass::from_name("o"), SymmetryClass::Trivial);
        assert_eq!(SymmetryClass::from_name("632"), SymmetryClass::Rotations);
        assert_eq!(SymmetryClass::from_name("**"), SymmetryClass::Reflections);
        assert_eq!(SymmetryClass::from_name("1*"), SymmetryClass::Reflections);
        assert_eq!(SymmetryClass::from_name("xx"), SymmetryClass::Glides);
        assert_eq!(SymmetryClass::from_name("4*2"), SymmetryClass::RotationsAndReflections);
        assert_eq!(SymmetryClass::from_name("22x"), SymmetryClass::RotationsAndGlides);
        assert_eq!(SymmetryClass::from_name("*x"), SymmetryClass::ReflectionsAndGlides);
        assert_eq!(
            SymmetryClass::from_name("2*2x"),
            SymmetryClass::RotationsReflectionsAndGlides
        );
        assert_eq!(SymmetryClass::from_name("(12)"), SymmetryClass::Rotations);
    }

    #[test]
    fn classify_symbols() {
        assert_eq!(
            SymmetryClass::of(&catalog::cube()),
            SymmetryClass::RotationsAndReflections
        );
        assert_eq!(SymmetryClass::of(&catalog::cube_map()), SymmetryClass::Trivial);
        assert!(!SymmetryClass::Trivial.has_rotations());
    }
}
