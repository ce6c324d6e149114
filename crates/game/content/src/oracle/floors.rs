//! [`tower_core::FloorOracle`] backed by an ordered list.
use tower_core::{FloorDefinition, FloorOracle};

/// Floor table; entry `i` is floor `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FloorTable {
    floors: Vec<FloorDefinition>,
}

impl FloorTable {
    pub fn new(floors: Vec<FloorDefinition>) -> Self {
        Self { floors }
    }

    /// Appends the next floor.
    pub fn push(&mut self, floor: FloorDefinition) {
        self.floors.push(floor);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &FloorDefinition)> {
        (1u32..).zip(self.floors.iter())
    }
}

impl FloorOracle for FloorTable {
    fn floor(&self, number: u32) -> Option<&FloorDefinition> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.floors.get(index)
    }

    fn floor_count(&self) -> u32 {
        u32::try_from(self.floors.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_are_one_based() {
        let table = FloorTable::new(vec![
            FloorDefinition::new(["slime".into()], "floor-1"),
            FloorDefinition::new(["boss".into()], "floor-3"),
        ]);

        assert!(table.floor(0).is_none());
        assert_eq!(table.floor(1).map(|f| f.layout.as_str()), Some("floor-1"));
        assert_eq!(table.floor(2).map(|f| f.layout.as_str()), Some("floor-3"));
        assert!(table.floor(3).is_none());
        assert_eq!(table.floor_count(), 2);
    }
}
