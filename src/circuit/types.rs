//! Core handle types for circuit representation.

use std::fmt;

/// Name of the supply rail.
pub const VCC: &str = "Vcc";

/// Name of the ground rail.
pub const GND: &str = "Gnd";

/// Name of the discard rail. Renders as nothing.
pub const UNUSED: &str = "Unused";

/// A unique identifier for a wire in the network.
/// Indices 0, 1 and 2 are always the rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// A unique identifier for a component in the network.
///
/// Ids are handed out in construction order, which makes them usable as
/// stable node names in rendered graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// The three shared wires every circuit provides.
///
/// Created once with the network and never reassigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rails {
    /// Supply rail, always high
    pub vcc: WireId,
    /// Ground rail
    pub gnd: WireId,
    /// Write-only discard target
    pub unused: WireId,
}

impl Rails {
    /// Rails occupy the first three wire slots.
    pub const fn standard() -> Self {
        Self {
            vcc: WireId(0),
            gnd: WireId(1),
            unused: WireId(2),
        }
    }
}

/// The operator applied by a combiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    Or,
    And,
}

impl CombineOp {
    /// Apply the operator.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            CombineOp::Or => a || b,
            CombineOp::And => a && b,
        }
    }
}

impl fmt::Display for CombineOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineOp::Or => write!(f, "OR"),
            CombineOp::And => write!(f, "AND"),
        }
    }
}
