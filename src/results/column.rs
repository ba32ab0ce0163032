pub const MIN_COLUMN_WIDTH: usize = 5;
pub const MAX_COLUMN_WIDTH: usize = 25;

/// Bounds applied to every computed column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub min: usize,
    pub max: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            min: MIN_COLUMN_WIDTH,
            max: MAX_COLUMN_WIDTH,
        }
    }
}

impl ColumnWidths {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Display width for a column whose longest entry (name included) is
    /// `longest` characters: one column of padding, then clamped. `min` is
    /// applied first, so `max` wins if the bounds cross.
    pub fn width_for(&self, longest: usize) -> usize {
        (longest + 1).max(self.min).min(self.max)
    }
}

/// A result column: its name and the width it should be drawn with.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{name}({width})")]
pub struct Column {
    pub name: String,
    pub width: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5)]
    #[case(3, 5)]
    #[case(4, 5)]
    #[case(5, 6)]
    #[case(24, 25)]
    #[case(25, 25)]
    #[case(40, 25)]
    fn default_bounds(#[case] longest: usize, #[case] expected: usize) {
        assert_eq!(ColumnWidths::default().width_for(longest), expected);
    }

    #[test]
    fn crossed_bounds_prefer_max() {
        assert_eq!(ColumnWidths::new(10, 4).width_for(1), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Column::new("id", 5).to_string(), "id(5)");
    }
}
