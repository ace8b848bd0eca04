//! Indexable array

use super::{IdAllocator, Item, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct Array {
    items: Vec<Item>,
    ids: IdAllocator,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[Value]) -> Self {
        let mut array = Self::new();
        for value in values {
            let item = array.ids.item(*value);
            array.items.push(item);
        }
        array
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn values(&self) -> Vec<Value> {
        self.items.iter().map(|i| i.value).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Sequence {
            kind: StructureKind::Array,
            items: self.items.clone(),
        }
    }

    pub fn append(&mut self, value: Value) -> VizResult<OperationReport> {
        let item = self.ids.item(value);
        self.items.push(item);
        Ok(OperationReport::new(format!(
            "Appended {} at index {}",
            value,
            self.items.len() - 1
        )))
    }

    /// Insert before `index`; `index == len` appends
    pub fn insert_at(&mut self, index: usize, value: Value) -> VizResult<OperationReport> {
        if index > self.items.len() {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.ids.item(value);
        self.items.insert(index, item);
        Ok(OperationReport::new(format!(
            "Inserted {} at index {}",
            value, index
        )))
    }

    pub fn delete_at(&mut self, index: usize) -> VizResult<OperationReport> {
        if self.items.is_empty() {
            return Err(VizError::EmptyStructure {
                kind: StructureKind::Array,
            });
        }
        if index >= self.items.len() {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        Ok(OperationReport::with_value(
            format!("Deleted {} from index {}", removed.value, index),
            removed.value,
        ))
    }

    /// Overwrite in place; the slot keeps its identity
    pub fn update_at(&mut self, index: usize, value: Value) -> VizResult<OperationReport> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(VizError::IndexOutOfRange { index, len })?;
        let old = slot.value;
        slot.value = value;
        Ok(OperationReport::with_value(
            format!("Updated index {} from {} to {}", index, old, value),
            old,
        ))
    }

    /// Replace contents with `len` values drawn uniformly from `min..=max`
    pub fn randomize<R: Rng>(
        &mut self,
        len: usize,
        min: Value,
        max: Value,
        rng: &mut R,
    ) -> VizResult<OperationReport> {
        if min > max {
            return Err(VizError::InvalidInput {
                input: format!("{}..={}", min, max),
                reason: "minimum exceeds maximum".to_string(),
            });
        }
        self.items.clear();
        for _ in 0..len {
            let item = self.ids.item(rng.gen_range(min..=max));
            self.items.push(item);
        }
        Ok(OperationReport::new(format!(
            "Generated {} random values in {}..={}",
            len, min, max
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_insert_and_delete_at() {
        let mut a = Array::from_values(&[1, 2, 3]);
        a.insert_at(1, 9).unwrap();
        assert_eq!(a.values(), vec![1, 9, 2, 3]);
        a.insert_at(4, 7).unwrap();
        assert_eq!(a.values(), vec![1, 9, 2, 3, 7]);
        let report = a.delete_at(0).unwrap();
        assert_eq!(report.value, Some(1));
        assert_eq!(a.values(), vec![9, 2, 3, 7]);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut a = Array::from_values(&[1, 2]);
        assert_eq!(
            a.insert_at(5, 0).unwrap_err(),
            VizError::IndexOutOfRange { index: 5, len: 2 }
        );
        assert!(a.delete_at(2).is_err());
        assert!(a.update_at(2, 4).is_err());
        assert_eq!(a.values(), vec![1, 2]);
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut a = Array::from_values(&[4, 5]);
        let id = a.items()[1].id;
        a.update_at(1, 42).unwrap();
        assert_eq!(a.items()[1].id, id);
        assert_eq!(a.items()[1].value, 42);
    }

    #[test]
    fn test_randomize_within_range() {
        let mut a = Array::new();
        let mut rng = StdRng::seed_from_u64(7);
        a.randomize(20, -3, 3, &mut rng).unwrap();
        assert_eq!(a.len(), 20);
        assert!(a.values().iter().all(|v| (-3..=3).contains(v)));
        assert!(a.randomize(3, 5, 1, &mut rng).is_err());
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut a = Array::from_values(&[1, 1, 1]);
        a.append(1).unwrap();
        let mut ids: Vec<_> = a.items().iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
