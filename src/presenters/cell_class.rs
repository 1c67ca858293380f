//! Per-cell classification shared by every renderer.

/// Highest colour band; counts above it share the last band.
pub const MAX_BAND: u32 = 15;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellClass {
    /// Did not escape within the iteration budget.
    Stable,
    Unstable { band: u32 },
}

#[must_use]
pub fn classify(escape_count: u32) -> CellClass {
    match escape_count {
        0 => CellClass::Stable,
        count => CellClass::Unstable {
            band: count.min(MAX_BAND),
        },
    }
}

/// Column width for numeric cells: the widest count below `max_iterations` plus one
/// separating space.
#[must_use]
pub fn count_width(max_iterations: u32) -> usize {
    max_iterations.saturating_sub(1).max(1).ilog10() as usize + 2
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Shaded,
    Counts,
}

impl DisplayMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Shaded => Self::Counts,
            Self::Counts => Self::Shaded,
        }
    }
}
