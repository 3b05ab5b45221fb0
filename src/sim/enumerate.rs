//! Input assignment enumeration.

/// Iterator over every assignment of `width` boolean inputs.
///
/// Assignments come in binary counting order with input 0 as the most
/// significant bit, so `false` precedes `true` for every input and the
/// last input toggles fastest.
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    next: u64,
    end: u64,
}

impl Assignments {
    /// Enumerate assignments of `width` inputs.
    ///
    /// `width` must stay below 64; the simulator clamps it far lower.
    pub fn new(width: usize) -> Self {
        debug_assert!(width < 64, "cannot enumerate {width} inputs");
        Self {
            width,
            next: 0,
            end: 1u64 << width,
        }
    }

    /// Bits of one counter value, most significant first.
    fn bits(&self, counter: u64) -> Vec<bool> {
        (0..self.width)
            .map(|i| (counter >> (self.width - 1 - i)) & 1 == 1)
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let bits = self.bits(self.next);
        self.next += 1;
        Some(bits)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}
