//! Live data structures and the operations that mutate them
//!
//! This module provides the authoritative state a session visualizes:
//! - [`array`]: indexable array with random fill
//! - [`stack`]: LIFO stack
//! - [`queue`]: FIFO queue
//! - [`linked_list`]: singly linked list
//! - [`bst`]: binary search tree with successor-replacement delete
//! - [`graph`]: undirected graph with integer node labels
//!
//! # Element Identity
//!
//! Every element carries an [`ElementId`] handed out by the structure's own
//! [`IdAllocator`]. Ids are never reused within one structure and travel with
//! the element when it moves, so recorded steps can point at "this 5" rather
//! than "whatever sits at index 2".
//!
//! # Operations
//!
//! [`Structure::apply`] executes one [`Operation`] synchronously and returns an
//! [`OperationReport`] with a narration line. A rejected operation leaves the
//! structure untouched.

pub mod array;
pub mod bst;
pub mod graph;
pub mod linked_list;
pub mod queue;
pub mod stack;

use crate::errors::{VizError, VizResult};
use crate::snapshot::Snapshot;
use std::fmt;

pub use array::Array;
pub use bst::BinarySearchTree;
pub use graph::Graph;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;

/// Element payload type
pub type Value = i64;

/// Stable identifier of one element inside a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value together with its identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: ElementId,
    pub value: Value,
}

/// Monotonic id source, one per structure
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Wrap a value in a fresh item
    pub fn item(&mut self, value: Value) -> Item {
        Item {
            id: self.next_id(),
            value,
        }
    }
}

/// The six kinds of structure a session can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StructureKind {
    Array,
    Stack,
    Queue,
    #[value(name = "list", alias = "linked-list")]
    LinkedList,
    #[value(alias = "bst")]
    Tree,
    Graph,
}

impl StructureKind {
    pub const ALL: [StructureKind; 6] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::LinkedList,
        StructureKind::Tree,
        StructureKind::Graph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Array => "array",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::LinkedList => "linked list",
            StructureKind::Tree => "binary search tree",
            StructureKind::Graph => "graph",
        }
    }

    /// Cycle order used by the UI
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single non-visualized edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Push(Value),
    Pop,
    /// Top of a stack, front of a queue
    Peek,
    Enqueue(Value),
    Dequeue,
    Append(Value),
    InsertAt { index: usize, value: Value },
    DeleteAt { index: usize },
    UpdateAt { index: usize, value: Value },
    /// Remove the first occurrence of a value from a linked list
    RemoveValue(Value),
    /// BST insert
    Insert(Value),
    /// BST delete
    Delete(Value),
    AddNode(Value),
    RemoveNode(Value),
    AddEdge(Value, Value),
    RemoveEdge(Value, Value),
    /// Replace the array contents with `len` uniform values in `min..=max`
    Randomize { len: usize, min: Value, max: Value },
    Clear,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Push(_) => "push",
            Operation::Pop => "pop",
            Operation::Peek => "peek",
            Operation::Enqueue(_) => "enqueue",
            Operation::Dequeue => "dequeue",
            Operation::Append(_) => "append",
            Operation::InsertAt { .. } => "insert at index",
            Operation::DeleteAt { .. } => "delete at index",
            Operation::UpdateAt { .. } => "update at index",
            Operation::RemoveValue(_) => "remove value",
            Operation::Insert(_) => "insert",
            Operation::Delete(_) => "delete",
            Operation::AddNode(_) => "add node",
            Operation::RemoveNode(_) => "remove node",
            Operation::AddEdge(..) => "add edge",
            Operation::RemoveEdge(..) => "remove edge",
            Operation::Randomize { .. } => "randomize",
            Operation::Clear => "clear",
        }
    }

    /// Number of elements the operation adds, if any
    pub fn growth(&self) -> usize {
        match self {
            Operation::Push(_)
            | Operation::Enqueue(_)
            | Operation::Append(_)
            | Operation::InsertAt { .. }
            | Operation::Insert(_)
            | Operation::AddNode(_) => 1,
            _ => 0,
        }
    }
}

/// Result of an accepted operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    /// Narration for the "last operation" label
    pub message: String,
    /// Value produced by pop/dequeue/peek/delete, if any
    pub value: Option<Value>,
}

impl OperationReport {
    pub fn new(message: impl Into<String>) -> Self {
        OperationReport {
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(message: impl Into<String>, value: Value) -> Self {
        OperationReport {
            message: message.into(),
            value: Some(value),
        }
    }
}

/// The live structure owned by a session
#[derive(Debug, Clone)]
pub enum Structure {
    Array(Array),
    Stack(Stack),
    Queue(Queue),
    LinkedList(LinkedList),
    Tree(BinarySearchTree),
    Graph(Graph),
}

impl Structure {
    /// Create an empty structure of the given kind
    pub fn new(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Array => Structure::Array(Array::new()),
            StructureKind::Stack => Structure::Stack(Stack::new()),
            StructureKind::Queue => Structure::Queue(Queue::new()),
            StructureKind::LinkedList => Structure::LinkedList(LinkedList::new()),
            StructureKind::Tree => Structure::Tree(BinarySearchTree::new()),
            StructureKind::Graph => Structure::Graph(Graph::new()),
        }
    }

    /// Demo contents for each kind
    pub fn sample(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Array => Structure::Array(Array::from_values(&[5, 2, 8, 1, 9])),
            StructureKind::Stack => Structure::Stack(Stack::from_values(&[10, 20, 30])),
            StructureKind::Queue => Structure::Queue(Queue::from_values(&[10, 20, 30])),
            StructureKind::LinkedList => {
                Structure::LinkedList(LinkedList::from_values(&[3, 7, 1, 9]))
            }
            StructureKind::Tree => {
                Structure::Tree(BinarySearchTree::from_values(&[5, 3, 8, 1, 4]))
            }
            StructureKind::Graph => Structure::Graph(Graph::sample()),
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::Array(_) => StructureKind::Array,
            Structure::Stack(_) => StructureKind::Stack,
            Structure::Queue(_) => StructureKind::Queue,
            Structure::LinkedList(_) => StructureKind::LinkedList,
            Structure::Tree(_) => StructureKind::Tree,
            Structure::Graph(_) => StructureKind::Graph,
        }
    }

    /// Number of elements (graph: nodes)
    pub fn len(&self) -> usize {
        match self {
            Structure::Array(a) => a.len(),
            Structure::Stack(s) => s.len(),
            Structure::Queue(q) => q.len(),
            Structure::LinkedList(l) => l.len(),
            Structure::Tree(t) => t.len(),
            Structure::Graph(g) => g.node_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full state as a snapshot
    pub fn snapshot(&self) -> Snapshot {
        match self {
            Structure::Array(a) => a.snapshot(),
            Structure::Stack(s) => s.snapshot(),
            Structure::Queue(q) => q.snapshot(),
            Structure::LinkedList(l) => l.snapshot(),
            Structure::Tree(t) => t.snapshot(),
            Structure::Graph(g) => g.snapshot(),
        }
    }

    /// Apply one operation, leaving the structure unchanged on error
    pub fn apply(&mut self, op: &Operation) -> VizResult<OperationReport> {
        let kind = self.kind();
        let unsupported = || VizError::UnsupportedOperation {
            operation: op.name(),
            kind,
        };

        if let Operation::Clear = op {
            *self = Structure::new(kind);
            return Ok(OperationReport::new(format!("Cleared the {}", kind)));
        }

        match self {
            Structure::Array(array) => match op {
                Operation::Append(value) => array.append(*value),
                Operation::InsertAt { index, value } => array.insert_at(*index, *value),
                Operation::DeleteAt { index } => array.delete_at(*index),
                Operation::UpdateAt { index, value } => array.update_at(*index, *value),
                Operation::Randomize { len, min, max } => {
                    array.randomize(*len, *min, *max, &mut rand::thread_rng())
                }
                _ => Err(unsupported()),
            },
            Structure::Stack(stack) => match op {
                Operation::Push(value) => Ok(stack.push(*value)),
                Operation::Pop => stack.pop(),
                Operation::Peek => stack.peek(),
                _ => Err(unsupported()),
            },
            Structure::Queue(queue) => match op {
                Operation::Enqueue(value) => Ok(queue.enqueue(*value)),
                Operation::Dequeue => queue.dequeue(),
                Operation::Peek => queue.front(),
                _ => Err(unsupported()),
            },
            Structure::LinkedList(list) => match op {
                Operation::Append(value) => Ok(list.append(*value)),
                Operation::InsertAt { index, value } => list.insert_at(*index, *value),
                Operation::DeleteAt { index } => list.delete_at(*index),
                Operation::RemoveValue(value) => list.remove_value(*value),
                _ => Err(unsupported()),
            },
            Structure::Tree(tree) => match op {
                Operation::Insert(value) => tree.insert(*value),
                Operation::Delete(value) => tree.delete(*value),
                _ => Err(unsupported()),
            },
            Structure::Graph(graph) => match op {
                Operation::AddNode(label) => graph.add_node(*label),
                Operation::RemoveNode(label) => graph.remove_node(*label),
                Operation::AddEdge(a, b) => graph.add_edge(*a, *b),
                Operation::RemoveEdge(a, b) => graph.remove_edge(*a, *b),
                _ => Err(unsupported()),
            },
        }
    }

    /// Operation that adds `value` in the natural way for this kind
    pub fn insertion_for(&self, value: Value) -> Operation {
        match self.kind() {
            StructureKind::Array | StructureKind::LinkedList => Operation::Append(value),
            StructureKind::Stack => Operation::Push(value),
            StructureKind::Queue => Operation::Enqueue(value),
            StructureKind::Tree => Operation::Insert(value),
            StructureKind::Graph => Operation::AddNode(value),
        }
    }
}
