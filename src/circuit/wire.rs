//! Named circuit nodes.

use super::signal::Signal;
use super::types::{GND, UNUSED, VCC};

/// A named node carrying a logical signal and a ground-conflict flag.
#[derive(Debug, Clone)]
pub struct Wire {
    pub name: String,
    /// Logical value
    pub signal: Signal,
    /// Asserted while a conducting transistor shorts this node to ground
    pub ground: Signal,
    /// Declared as a circuit input or output
    pub port: bool,
}

impl Wire {
    /// Create a low, ungrounded wire.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signal: Signal::new(false),
            ground: Signal::new(false),
            port: false,
        }
    }

    /// Create a wire with explicit initial cell values.
    pub fn with_state(name: impl Into<String>, signal: bool, ground: bool) -> Self {
        Self {
            name: name.into(),
            signal: Signal::new(signal),
            ground: Signal::new(ground),
            port: false,
        }
    }

    /// Check if this is the discard rail.
    pub fn is_unused(&self) -> bool {
        self.name == UNUSED
    }

    /// Render the wire for text output.
    ///
    /// Rails print their bare name, the discard rail prints nothing.
    pub fn render(&self) -> String {
        if self.name == VCC || self.name == GND {
            return self.name.clone();
        }
        if self.is_unused() {
            return String::new();
        }
        let value = u8::from(self.signal.value());
        if self.ground.value() {
            format!("{}={{{}, {}}}", self.name, value, GND)
        } else {
            format!("{}={}", self.name, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let mut wire = Wire::new("a");
        assert_eq!(wire.render(), "a=0");
        wire.signal.silent_set(true);
        assert_eq!(wire.render(), "a=1");
    }

    #[test]
    fn test_render_grounded() {
        let wire = Wire::with_state("m", true, true);
        assert_eq!(wire.render(), "m={1, Gnd}");
    }

    #[test]
    fn test_render_rails() {
        assert_eq!(Wire::with_state(VCC, true, false).render(), "Vcc");
        assert_eq!(Wire::with_state(GND, true, true).render(), "Gnd");
        assert_eq!(Wire::new(UNUSED).render(), "");
    }
}
