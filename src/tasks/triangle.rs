//! Triangle classification by side lengths.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    NotATriangle,
    Equilateral,
    Isosceles,
    Scalene,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriangleKind::NotATriangle => "not a triangle",
            TriangleKind::Equilateral => "equilateral triangle",
            TriangleKind::Isosceles => "isosceles triangle",
            TriangleKind::Scalene => "scalene triangle",
        };
        f.write_str(s)
    }
}

/// Degenerate triangles (one side equal to the sum of the others) are rejected.
pub fn classify(a: f64, b: f64, c: f64) -> TriangleKind {
    if a + b <= c || a + c <= b || b + c <= a {
        TriangleKind::NotATriangle
    } else if a == b && b == c {
        TriangleKind::Equilateral
    } else if a == b || a == c || b == c {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    }
}
