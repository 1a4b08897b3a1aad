/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `n` of either half is set when a cell with `n` live neighbors is born (or survives).
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Any bit past the 8th is ignored, since a cell never has more than 8 neighbors.
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a cell is alive in the next generation, given its current state and its number of
    /// live neighbors.
    pub fn next(&self, alive: bool, neighbors: u8) -> bool {
        if neighbors > 8 {
            return false;
        }

        let mask = 1 << neighbors;

        if alive {
            self.survivals() & mask == mask
        } else {
            self.births() & mask == mask
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_birth_and_survival() {
        assert_eq!(B3S23.births(), 0b1000);
        assert_eq!(B3S23.survivals(), 0b1100);
    }

    #[test]
    fn live_cell_survives_on_two_or_three() {
        let survives: Vec<u8> = (0..=8).filter(|&n| B3S23.next(true, n)).collect();

        assert_eq!(survives, [2, 3]);
    }

    #[test]
    fn dead_cell_is_born_on_three() {
        let born: Vec<u8> = (0..=8).filter(|&n| B3S23.next(false, n)).collect();

        assert_eq!(born, [3]);
    }

    #[test]
    fn live_cell_dies_of_loneliness_and_overcrowding() {
        assert!(!B3S23.next(true, 1));
        assert!(!B3S23.next(true, 4));
    }
}
