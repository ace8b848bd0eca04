//! Singly linked list
//!
//! Nodes are owned through `Option<Box<ListNode>>` links. Positional
//! operations walk the links from the head, as the visualized list does.

use super::{IdAllocator, Item, OperationReport, StructureKind, Value};
use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
struct ListNode {
    item: Item,
    next: Option<Box<ListNode>>,
}

#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
    ids: IdAllocator,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[Value]) -> Self {
        let mut list = Self::new();
        for value in values {
            list.append(*value);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Items from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.item)
    }

    pub fn values(&self) -> Vec<Value> {
        self.iter().map(|i| i.value).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Sequence {
            kind: StructureKind::LinkedList,
            items: self.iter().copied().collect(),
        }
    }

    pub fn append(&mut self, value: Value) -> OperationReport {
        let item = self.ids.item(value);
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(ListNode { item, next: None }));
        self.len += 1;
        OperationReport::new(format!("Appended {} at the tail", value))
    }

    /// Insert so the new node ends up at position `index`
    pub fn insert_at(&mut self, index: usize, value: Value) -> VizResult<OperationReport> {
        if index > self.len {
            return Err(VizError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let item = self.ids.item(value);
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => {
                    return Err(VizError::IndexOutOfRange {
                        index,
                        len: self.len,
                    })
                }
            }
        }
        let next = link.take();
        *link = Some(Box::new(ListNode { item, next }));
        self.len += 1;
        Ok(OperationReport::new(if index == 0 {
            format!("Inserted {} at the head", value)
        } else {
            format!("Inserted {} at position {}", value, index)
        }))
    }

    pub fn delete_at(&mut self, index: usize) -> VizResult<OperationReport> {
        if self.head.is_none() {
            return Err(VizError::EmptyStructure {
                kind: StructureKind::LinkedList,
            });
        }
        let out_of_range = VizError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(out_of_range),
            }
        }
        let node = link.take().ok_or(out_of_range)?;
        let ListNode { item, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(OperationReport::with_value(
            format!("Deleted {} from position {}", item.value, index),
            item.value,
        ))
    }

    /// Unlink the first node holding `value`
    pub fn remove_value(&mut self, value: Value) -> VizResult<OperationReport> {
        if self.head.is_none() {
            return Err(VizError::EmptyStructure {
                kind: StructureKind::LinkedList,
            });
        }
        let index = self
            .iter()
            .position(|item| item.value == value)
            .ok_or(VizError::KeyNotFound { value })?;
        self.delete_at(index)?;
        Ok(OperationReport::with_value(
            format!("Removed {} from position {}", value, index),
            value,
        ))
    }
}

impl Drop for LinkedList {
    // Unlink iteratively so long lists don't recurse through Box drops
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
