//! Search drivers over sequences

use super::sorting::SequenceTracer;
use super::Algorithm;
use crate::errors::{VizError, VizResult};
use crate::snapshot::{Run, StepKind};
use crate::structures::{Item, LinkedList, StructureKind, Value};

pub fn linear_search(items: &[Item], target: Value, max_steps: usize) -> VizResult<Run> {
    if items.is_empty() {
        return Err(VizError::EmptyStructure {
            kind: StructureKind::Array,
        });
    }
    let mut t = SequenceTracer::start(
        Algorithm::LinearSearch { target },
        StructureKind::Array,
        items,
        max_steps,
        "linear_search(arr, target)",
    )?;

    for (index, item) in items.iter().enumerate() {
        t.step(
            StepKind::Compare,
            format!("Compare arr[{}] = {} with {}", index, item.value, target),
            "if arr[i] == target",
            vec![item.id],
            t.ids(0..index),
        )?;
        if item.value == target {
            t.step(
                StepKind::Found,
                format!("Found {} at index {}", target, index),
                "return i",
                vec![item.id],
                Vec::new(),
            )?;
            return t.complete(
                format!("Search finished: {} is at index {}", target, index),
                "return i",
                vec![item.id],
                Vec::new(),
            );
        }
    }

    t.step(
        StepKind::NotFound,
        format!("{} is not in the array", target),
        "return -1",
        Vec::new(),
        t.ids(0..items.len()),
    )?;
    t.complete(
        format!("Search finished: {} not found", target),
        "return -1",
        Vec::new(),
        Vec::new(),
    )
}

/// Binary search; the array must be in non-decreasing order
pub fn binary_search(items: &[Item], target: Value, max_steps: usize) -> VizResult<Run> {
    if items.is_empty() {
        return Err(VizError::EmptyStructure {
            kind: StructureKind::Array,
        });
    }
    if items.windows(2).any(|w| w[0].value > w[1].value) {
        return Err(VizError::NotSorted);
    }
    let mut t = SequenceTracer::start(
        Algorithm::BinarySearch { target },
        StructureKind::Array,
        items,
        max_steps,
        "binary_search(arr, target)",
    )?;

    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let item = items[mid];
        t.step(
            StepKind::Compare,
            format!(
                "Middle of {}..{} is arr[{}] = {}; compare with {}",
                lo, hi, mid, item.value, target
            ),
            "mid = (lo + hi) / 2",
            vec![item.id],
            t.ids(lo..hi),
        )?;
        if item.value == target {
            t.step(
                StepKind::Found,
                format!("Found {} at index {}", target, mid),
                "return mid",
                vec![item.id],
                Vec::new(),
            )?;
            return t.complete(
                format!("Search finished: {} is at index {}", target, mid),
                "return mid",
                vec![item.id],
                Vec::new(),
            );
        }
        if item.value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    t.step(
        StepKind::NotFound,
        format!("Range is empty; {} is not in the array", target),
        "return -1",
        Vec::new(),
        Vec::new(),
    )?;
    t.complete(
        format!("Search finished: {} not found", target),
        "return -1",
        Vec::new(),
        Vec::new(),
    )
}

/// Walk a linked list from the head looking for `target`
pub fn list_search(list: &LinkedList, target: Value, max_steps: usize) -> VizResult<Run> {
    if list.is_empty() {
        return Err(VizError::EmptyStructure {
            kind: StructureKind::LinkedList,
        });
    }
    let items: Vec<Item> = list.iter().copied().collect();
    let mut t = SequenceTracer::start(
        Algorithm::ListSearch { target },
        StructureKind::LinkedList,
        &items,
        max_steps,
        "node = head",
    )?;

    for (position, item) in items.iter().enumerate() {
        t.step(
            StepKind::Visit,
            format!("Visit node {} holding {}", position, item.value),
            if position == 0 {
                "if node.value == target"
            } else {
                "node = node.next"
            },
            vec![item.id],
            t.ids(0..position),
        )?;
        if item.value == target {
            t.step(
                StepKind::Found,
                format!("Found {} at position {}", target, position),
                "return node",
                vec![item.id],
                t.ids(0..position),
            )?;
            return t.complete(
                format!("Search finished: {} is at position {}", target, position),
                "return node",
                vec![item.id],
                Vec::new(),
            );
        }
    }

    t.step(
        StepKind::NotFound,
        format!("Reached the end of the list; {} not found", target),
        "return null",
        Vec::new(),
        t.ids(0..items.len()),
    )?;
    t.complete(
        format!("Search finished: {} not found", target),
        "return null",
        Vec::new(),
        Vec::new(),
    )
}
