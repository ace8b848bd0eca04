//! FIFO queue
//!
//! The front of the queue is the first element of the snapshot sequence.

use super::{IdAllocator, Item, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<Item>,
    ids: IdAllocator,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[Value]) -> Self {
        let mut queue = Self::new();
        for value in values {
            queue.enqueue(*value);
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Values from front to back
    pub fn values(&self) -> Vec<Value> {
        self.items.iter().map(|i| i.value).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Sequence {
            kind: StructureKind::Queue,
            items: self.items.iter().copied().collect(),
        }
    }

    pub fn enqueue(&mut self, value: Value) -> OperationReport {
        let item = self.ids.item(value);
        self.items.push_back(item);
        OperationReport::new(format!("Enqueued {}", value))
    }

    pub fn dequeue(&mut self) -> VizResult<OperationReport> {
        let item = self.items.pop_front().ok_or(VizError::EmptyStructure {
            kind: StructureKind::Queue,
        })?;
        Ok(OperationReport::with_value(
            format!("Dequeued {}", item.value),
            item.value,
        ))
    }

    pub fn front(&self) -> VizResult<OperationReport> {
        let item = self.items.front().ok_or(VizError::EmptyStructure {
            kind: StructureKind::Queue,
        })?;
        Ok(OperationReport::with_value(
            format!("Front of the queue is {}", item.value),
            item.value,
        ))
    }
}
