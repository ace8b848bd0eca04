//! LIFO stack
//!
//! The top of the stack is the last element of the snapshot sequence.

use super::{IdAllocator, Item, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<Item>,
    ids: IdAllocator,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[Value]) -> Self {
        let mut stack = Self::new();
        for value in values {
            stack.push(*value);
        }
        stack
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Values from bottom to top
    pub fn values(&self) -> Vec<Value> {
        self.items.iter().map(|i| i.value).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Sequence {
            kind: StructureKind::Stack,
            items: self.items.clone(),
        }
    }

    pub fn push(&mut self, value: Value) -> OperationReport {
        let item = self.ids.item(value);
        self.items.push(item);
        OperationReport::new(format!("Pushed {} onto the stack", value))
    }

    pub fn pop(&mut self) -> VizResult<OperationReport> {
        let item = self.items.pop().ok_or(VizError::EmptyStructure {
            kind: StructureKind::Stack,
        })?;
        Ok(OperationReport::with_value(
            format!("Popped {} from the stack", item.value),
            item.value,
        ))
    }

    pub fn peek(&self) -> VizResult<OperationReport> {
        let item = self.items.last().ok_or(VizError::EmptyStructure {
            kind: StructureKind::Stack,
        })?;
        Ok(OperationReport::with_value(
            format!("Top of the stack is {}", item.value),
            item.value,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::from_values(&[1, 2, 3]);
        assert_eq!(s.pop().unwrap().value, Some(3));
        assert_eq!(s.peek().unwrap().value, Some(2));
        assert_eq!(s.values(), vec![1, 2]);
    }

    #[test]
    fn test_pop_empty() {
        let mut s = Stack::new();
        let err = s.pop().unwrap_err();
        assert_eq!(err.to_string(), "stack is empty");
        assert!(s.peek().is_err());
    }
}
