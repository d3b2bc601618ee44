//! Pure direction-to-item resolution.

use crate::key::ItemKey;

/// A logical navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row or item.
    Up,
    /// Toward the next row or item.
    Down,
    /// Toward the previous column or item.
    Left,
    /// Toward the next column or item.
    Right,
    /// The first item overall.
    First,
    /// The last item overall.
    Last,
}

/// The spatial arrangement a collection navigates as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// A vertical sequence. Up/Down move; Left/Right are rejected so hosts
    /// can reuse them (tree expand/collapse, submenu entry).
    #[default]
    Linear,
    /// A horizontal sequence. Left/Right move; Up/Down are rejected.
    Horizontal,
    /// A 2D grid in reading order with the given column count.
    Grid {
        /// Items per row; clamped to at least 1.
        columns: usize,
    },
}

/// Pure resolver from (items, current, direction) to the next item.
///
/// Resolution never mutates anything and never signals; identical arguments
/// always yield identical results. `None` means "no movement": the direction
/// is off-axis for the topology, or a boundary was hit without looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDelegate {
    topology: Topology,
    loop_enabled: bool,
}

impl NavigationDelegate {
    /// Create a delegate for a topology, without boundary looping.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            loop_enabled: false,
        }
    }

    /// Enable or disable boundary looping.
    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    /// The delegate's topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether boundary movement loops.
    pub fn loops(&self) -> bool {
        self.loop_enabled
    }

    /// Resolve the item a direction leads to.
    ///
    /// `current = None` (or a key not in `items`) means navigation has no
    /// position yet: forward movement lands on the first item, backward
    /// movement on the last.
    pub fn resolve(
        &self,
        items: &[ItemKey],
        current: Option<&ItemKey>,
        direction: Direction,
    ) -> Option<ItemKey> {
        if items.is_empty() {
            return None;
        }
        let last = items.len() - 1;

        match direction {
            Direction::First => return Some(items[0].clone()),
            Direction::Last => return Some(items[last].clone()),
            _ => {}
        }

        let index = current.and_then(|key| items.iter().position(|k| k == key));
        let Some(index) = index else {
            // No position yet: enter the collection at the near edge.
            let entry = match (self.topology, direction) {
                (Topology::Linear, Direction::Down)
                | (Topology::Horizontal, Direction::Right)
                | (Topology::Grid { .. }, Direction::Down | Direction::Right) => Some(0),
                (Topology::Linear, Direction::Up)
                | (Topology::Horizontal, Direction::Left)
                | (Topology::Grid { .. }, Direction::Up | Direction::Left) => Some(last),
                _ => None,
            };
            return entry.map(|i| items[i].clone());
        };

        let next = match self.topology {
            Topology::Linear => match direction {
                Direction::Down => self.step_forward(index, last),
                Direction::Up => self.step_backward(index, last),
                _ => None,
            },
            Topology::Horizontal => match direction {
                Direction::Right => self.step_forward(index, last),
                Direction::Left => self.step_backward(index, last),
                _ => None,
            },
            Topology::Grid { columns } => self.resolve_grid(index, items.len(), columns, direction),
        };
        next.map(|i| items[i].clone())
    }

    fn step_forward(&self, index: usize, last: usize) -> Option<usize> {
        if index < last {
            Some(index + 1)
        } else if self.loop_enabled {
            Some(0)
        } else {
            None
        }
    }

    fn step_backward(&self, index: usize, last: usize) -> Option<usize> {
        if index > 0 {
            Some(index - 1)
        } else if self.loop_enabled {
            Some(last)
        } else {
            None
        }
    }

    fn resolve_grid(
        &self,
        index: usize,
        total: usize,
        columns: usize,
        direction: Direction,
    ) -> Option<usize> {
        let columns = columns.max(1);
        let rows = total.div_ceil(columns);
        let row = index / columns;
        let column = index % columns;

        match direction {
            Direction::Right => {
                let at_row_end = column + 1 == columns || index + 1 == total;
                if !at_row_end {
                    Some(index + 1)
                } else if self.loop_enabled {
                    // Reading order: the next row's first item, or the
                    // overall first from the overall last.
                    Some((index + 1) % total)
                } else {
                    None
                }
            }
            Direction::Left => {
                if column > 0 {
                    Some(index - 1)
                } else if self.loop_enabled {
                    Some((index + total - 1) % total)
                } else {
                    None
                }
            }
            Direction::Down => {
                let candidate = index + columns;
                if candidate < total {
                    Some(candidate)
                } else if self.loop_enabled {
                    // Past a ragged end: wrap to row 0 in the same column.
                    Some(column)
                } else {
                    None
                }
            }
            Direction::Up => {
                if row > 0 {
                    Some(index - columns)
                } else if self.loop_enabled {
                    // Wrap toward the last row; if the last row is ragged and
                    // lacks this column, land one row further up.
                    let candidate = (rows - 1) * columns + column;
                    if candidate < total {
                        Some(candidate)
                    } else {
                        Some(candidate - columns)
                    }
                } else {
                    None
                }
            }
            Direction::First | Direction::Last => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<ItemKey> {
        (1..=count as u64).map(ItemKey::from).collect()
    }

    fn nth(n: u64) -> ItemKey {
        ItemKey::from(n)
    }

    #[test]
    fn test_linear_rejects_horizontal_keys() {
        let delegate = NavigationDelegate::new(Topology::Linear).with_loop(true);
        let items = items(3);
        assert_eq!(delegate.resolve(&items, Some(&nth(2)), Direction::Left), None);
        assert_eq!(delegate.resolve(&items, Some(&nth(2)), Direction::Right), None);
    }

    #[test]
    fn test_horizontal_rejects_vertical_keys() {
        let delegate = NavigationDelegate::new(Topology::Horizontal).with_loop(true);
        let items = items(3);
        assert_eq!(delegate.resolve(&items, Some(&nth(2)), Direction::Up), None);
        assert_eq!(delegate.resolve(&items, Some(&nth(2)), Direction::Down), None);
    }

    #[test]
    fn test_five_item_vertical_loop_wraps_up_from_first() {
        let delegate = NavigationDelegate::new(Topology::Linear).with_loop(true);
        let items = items(5);
        assert_eq!(
            delegate.resolve(&items, Some(&nth(1)), Direction::Up),
            Some(nth(5))
        );
    }

    #[test]
    fn test_linear_boundary_without_loop() {
        let delegate = NavigationDelegate::new(Topology::Linear);
        let items = items(5);
        assert_eq!(delegate.resolve(&items, Some(&nth(1)), Direction::Up), None);
        assert_eq!(delegate.resolve(&items, Some(&nth(5)), Direction::Down), None);
        // Home/End work regardless of looping.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(3)), Direction::First),
            Some(nth(1))
        );
        assert_eq!(
            delegate.resolve(&items, Some(&nth(3)), Direction::Last),
            Some(nth(5))
        );
    }

    #[test]
    fn test_grid_down_twice_moves_in_column() {
        // 12 items, 4 columns: item 1 is (row 0, col 0); two rows down is
        // item 9 at (row 2, col 0).
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 });
        let items = items(12);
        let step1 = delegate
            .resolve(&items, Some(&nth(1)), Direction::Down)
            .unwrap();
        assert_eq!(step1, nth(5));
        let step2 = delegate.resolve(&items, Some(&step1), Direction::Down).unwrap();
        assert_eq!(step2, nth(9));
    }

    #[test]
    fn test_grid_last_row_down_without_loop_is_none() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 });
        let items = items(10);
        // Items 9 and 10 are the ragged last row.
        assert_eq!(delegate.resolve(&items, Some(&nth(9)), Direction::Down), None);
        // Item 7 has no item below it either (slot 11 does not exist).
        assert_eq!(delegate.resolve(&items, Some(&nth(7)), Direction::Down), None);
    }

    #[test]
    fn test_grid_down_wraps_to_row_zero_when_looping() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 }).with_loop(true);
        let items = items(10);
        assert_eq!(
            delegate.resolve(&items, Some(&nth(7)), Direction::Down),
            Some(nth(3))
        );
    }

    #[test]
    fn test_grid_up_from_row_zero_lands_on_last_occupied_row() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 }).with_loop(true);
        let items = items(10);
        // Column 0 exists in the last row.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(1)), Direction::Up),
            Some(nth(9))
        );
        // Column 2 is missing from the ragged last row; fall back one row.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(3)), Direction::Up),
            Some(nth(7))
        );
    }

    #[test]
    fn test_grid_row_wrap_in_reading_order() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 }).with_loop(true);
        let items = items(12);
        // Right at a row end continues on the next row.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(4)), Direction::Right),
            Some(nth(5))
        );
        // Right on the overall last wraps to the overall first.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(12)), Direction::Right),
            Some(nth(1))
        );
        // Left on the overall first wraps to the overall last.
        assert_eq!(
            delegate.resolve(&items, Some(&nth(1)), Direction::Left),
            Some(nth(12))
        );
    }

    #[test]
    fn test_grid_row_boundary_without_loop() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 });
        let items = items(12);
        assert_eq!(delegate.resolve(&items, Some(&nth(4)), Direction::Right), None);
        assert_eq!(delegate.resolve(&items, Some(&nth(5)), Direction::Left), None);
    }

    #[test]
    fn test_grid_loop_stays_in_range() {
        let delegate = NavigationDelegate::new(Topology::Grid { columns: 4 }).with_loop(true);
        let items = items(10);
        for item in &items {
            for direction in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::First,
                Direction::Last,
            ] {
                let next = delegate.resolve(&items, Some(item), direction);
                let next = next.unwrap();
                assert!(items.contains(&next), "{item:?} {direction:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn test_entry_without_position() {
        let delegate = NavigationDelegate::new(Topology::Linear);
        let items = items(5);
        assert_eq!(delegate.resolve(&items, None, Direction::Down), Some(nth(1)));
        assert_eq!(delegate.resolve(&items, None, Direction::Up), Some(nth(5)));
        // A stale key behaves like no position.
        let gone = ItemKey::from(99_u64);
        assert_eq!(
            delegate.resolve(&items, Some(&gone), Direction::Down),
            Some(nth(1))
        );
    }

    #[test]
    fn test_empty_items_resolve_to_none() {
        let delegate = NavigationDelegate::new(Topology::Linear).with_loop(true);
        assert_eq!(delegate.resolve(&[], None, Direction::Down), None);
        assert_eq!(delegate.resolve(&[], None, Direction::First), None);
    }
}
