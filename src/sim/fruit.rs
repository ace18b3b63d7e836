//! The fruit the snake chases

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::GridPosition;
use super::state::FieldConfig;

/// A single collectible on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub position: GridPosition,
}

impl Fruit {
    /// Place a fresh fruit somewhere on the field
    pub fn spawn<R: Rng>(field: &FieldConfig, rng: &mut R) -> Self {
        Self {
            position: random_cell(field, rng),
        }
    }

    /// Move the fruit to a new random cell.
    ///
    /// The new cell may equal the old one, or sit under the snake. Nothing
    /// here rerolls for either case.
    pub fn respawn<R: Rng>(&mut self, field: &FieldConfig, rng: &mut R) {
        self.position = random_cell(field, rng);
    }
}

/// Uniform pick over columns `1..cols` and rows `1..rows`: column/row 0 is
/// never used, the last column/row is.
fn random_cell<R: Rng>(field: &FieldConfig, rng: &mut R) -> GridPosition {
    let col = rng.random_range(1..field.cols());
    let row = rng.random_range(1..field.rows());
    GridPosition::from_cell(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_is_seeded() {
        let field = FieldConfig::default();
        let a = Fruit::spawn(&field, &mut Pcg32::seed_from_u64(7));
        let b = Fruit::spawn(&field, &mut Pcg32::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_smallest_field_has_one_spot() {
        // 2x2 cells: only (CELL, CELL) is eligible
        let field = FieldConfig::new(2 * CELL, 2 * CELL).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fruit = Fruit::spawn(&field, &mut rng);
        for _ in 0..20 {
            assert_eq!(fruit.position, GridPosition::new(CELL, CELL));
            fruit.respawn(&field, &mut rng);
        }
    }

    #[test]
    fn test_respawn_may_repeat_cell() {
        // On a 3x3 field there are four eligible cells, so a repeat shows up
        // quickly. Repeats are allowed, not rerolled.
        let field = FieldConfig::new(3 * CELL, 3 * CELL).unwrap();
        let mut rng = Pcg32::seed_from_u64(99);
        let mut fruit = Fruit::spawn(&field, &mut rng);
        let mut repeated = false;
        for _ in 0..200 {
            let before = fruit.position;
            fruit.respawn(&field, &mut rng);
            if fruit.position == before {
                repeated = true;
                break;
            }
        }
        assert!(repeated);
    }

    #[test]
    fn test_respawn_covers_last_row_and_column() {
        let field = FieldConfig::new(4 * CELL, 4 * CELL).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fruit = Fruit::spawn(&field, &mut rng);
        let mut seen_far_corner = false;
        for _ in 0..500 {
            fruit.respawn(&field, &mut rng);
            if fruit.position == GridPosition::new(field.width - CELL, field.height - CELL) {
                seen_far_corner = true;
                break;
            }
        }
        assert!(seen_far_corner);
    }

    proptest! {
        #[test]
        fn prop_respawn_stays_inside(seed in any::<u64>(), cols in 2i32..40, rows in 2i32..40) {
            let field = FieldConfig::new(cols * CELL, rows * CELL).unwrap();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut fruit = Fruit::spawn(&field, &mut rng);
            for _ in 0..16 {
                let p = fruit.position;
                prop_assert!(p.is_aligned());
                prop_assert!(CELL <= p.x && p.x <= field.width - CELL);
                prop_assert!(CELL <= p.y && p.y <= field.height - CELL);
                fruit.respawn(&field, &mut rng);
            }
        }
    }
}
