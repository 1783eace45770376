/// Static tips used when the model output does not yield enough candidates.
pub const FALLBACK_TIPS: [&str; 3] = [
    "Switch to LED bulbs to reduce lighting electricity consumption by up to 80%.",
    "Unplug electronic devices when not in use to eliminate standby power consumption.",
    "Use smart power strips to automatically cut power to devices when they're not needed.",
];

/// A single-use cursor over [`FALLBACK_TIPS`].
///
/// Every extraction creates its own pool, so tips consumed by one call are
/// never missing from another.
#[derive(Debug, Clone, Default)]
pub struct FallbackPool {
    next: usize,
}

impl FallbackPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        FALLBACK_TIPS.len() - self.next
    }
}

impl Iterator for FallbackPool {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let tip = *FALLBACK_TIPS.get(self.next)?;
        self.next += 1;
        Some(tip)
    }
}
