//! Grenade counter

/// Bounded, decrement-only grenade counter.
///
/// `count` starts at the original allotment and only ever goes down,
/// stopping at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grenades {
    original_count: u32,
    count: u32,
}

impl Grenades {
    pub fn new(amount: u32) -> Self {
        Self {
            original_count: amount,
            count: amount,
        }
    }

    /// Use up one grenade; no-op when none are left
    pub fn decrement(&mut self) {
        if self.count > 0 {
            self.count -= 1;
        }
    }

    /// Grenades still available
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Grenades available at the start of the level
    pub fn original_count(&self) -> u32 {
        self.original_count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
