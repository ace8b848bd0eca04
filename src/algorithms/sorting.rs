//! Sorting drivers over arrays
//!
//! All three sorts are the textbook versions: bubble sort swaps when the left
//! value is strictly greater, quick sort uses the Lomuto scheme with the last
//! element as pivot and moves values `<= pivot`, merge sort is top-down and
//! takes from the left run on ties.

use super::Algorithm;
use crate::errors::VizResult;
use crate::snapshot::{Run, RunRecorder, Snapshot, Step, StepKind};
use crate::structures::{ElementId, Item, StructureKind};

/// Working copy of a sequence plus the run being recorded over it
pub(crate) struct SequenceTracer {
    kind: StructureKind,
    pub(crate) work: Vec<Item>,
    recorder: RunRecorder,
}

impl SequenceTracer {
    /// Copy `items` and record the opening step
    pub(crate) fn start(
        algorithm: Algorithm,
        kind: StructureKind,
        items: &[Item],
        max_steps: usize,
        annotation: &str,
    ) -> VizResult<Self> {
        let mut tracer = SequenceTracer {
            kind,
            work: items.to_vec(),
            recorder: RunRecorder::new(algorithm, max_steps),
        };
        let values: Vec<_> = items.iter().map(|i| i.value).collect();
        tracer.step(
            StepKind::Start,
            format!("Start {} on {:?}", algorithm, values),
            annotation,
            Vec::new(),
            Vec::new(),
        )?;
        Ok(tracer)
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot::Sequence {
            kind: self.kind,
            items: self.work.clone(),
        }
    }

    pub(crate) fn step(
        &mut self,
        kind: StepKind,
        description: String,
        annotation: &str,
        highlighted: Vec<ElementId>,
        marked: Vec<ElementId>,
    ) -> VizResult<()> {
        let step = Step::new(kind, self.snapshot(), description, annotation)
            .highlight(highlighted)
            .mark(marked);
        self.recorder.record(step)
    }

    pub(crate) fn ids(&self, range: std::ops::Range<usize>) -> Vec<ElementId> {
        self.work[range].iter().map(|i| i.id).collect()
    }

    /// Record the closing step, keeping `highlighted` on screen
    pub(crate) fn complete(
        mut self,
        description: String,
        annotation: &str,
        highlighted: Vec<ElementId>,
        marked: Vec<ElementId>,
    ) -> VizResult<Run> {
        self.step(StepKind::Complete, description, annotation, highlighted, marked)?;
        Ok(self.recorder.finish())
    }

    /// Close a sort: every element marked as settled
    fn finish_sorted(self) -> VizResult<Run> {
        let all = self.ids(0..self.work.len());
        let values: Vec<_> = self.work.iter().map(|i| i.value).collect();
        self.complete(
            format!("Sorted: {:?}", values),
            "return arr",
            Vec::new(),
            all,
        )
    }
}

pub fn bubble_sort(items: &[Item], max_steps: usize) -> VizResult<Run> {
    let mut t = SequenceTracer::start(
        Algorithm::BubbleSort,
        StructureKind::Array,
        items,
        max_steps,
        "bubble_sort(arr)",
    )?;
    let n = t.work.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            let (a, b) = (t.work[j], t.work[j + 1]);
            t.step(
                StepKind::Compare,
                format!("Compare {} and {}", a.value, b.value),
                "if arr[j] > arr[j + 1]",
                vec![a.id, b.id],
                t.ids(n - pass..n),
            )?;
            if a.value > b.value {
                t.work.swap(j, j + 1);
                t.step(
                    StepKind::Swap,
                    format!("{} > {}, swap them", a.value, b.value),
                    "swap(arr[j], arr[j + 1])",
                    vec![a.id, b.id],
                    t.ids(n - pass..n),
                )?;
            }
        }
    }

    t.finish_sorted()
}

pub fn quick_sort(items: &[Item], max_steps: usize) -> VizResult<Run> {
    let mut t = SequenceTracer::start(
        Algorithm::QuickSort,
        StructureKind::Array,
        items,
        max_steps,
        "quick_sort(arr, 0, n - 1)",
    )?;
    let n = t.work.len();
    if n > 1 {
        quick_sort_range(&mut t, 0, n - 1)?;
    }
    t.finish_sorted()
}

/// Sort `lo..=hi`
fn quick_sort_range(t: &mut SequenceTracer, lo: usize, hi: usize) -> VizResult<()> {
    if lo >= hi {
        return Ok(());
    }
    let p = partition(t, lo, hi)?;
    if p > lo {
        quick_sort_range(t, lo, p - 1)?;
    }
    quick_sort_range(t, p + 1, hi)
}

/// Lomuto partition of `lo..=hi`, returning the pivot's final index
fn partition(t: &mut SequenceTracer, lo: usize, hi: usize) -> VizResult<usize> {
    let pivot = t.work[hi];
    t.step(
        StepKind::Pivot,
        format!("Pick {} as pivot for indices {}..={}", pivot.value, lo, hi),
        "pivot = arr[hi]",
        vec![pivot.id],
        t.ids(lo..hi + 1),
    )?;

    let mut i = lo;
    for j in lo..hi {
        let current = t.work[j];
        t.step(
            StepKind::Compare,
            format!("Compare {} with pivot {}", current.value, pivot.value),
            "if arr[j] <= pivot",
            vec![current.id],
            vec![pivot.id],
        )?;
        if current.value <= pivot.value {
            if i != j {
                let displaced = t.work[i];
                t.work.swap(i, j);
                t.step(
                    StepKind::Swap,
                    format!("Move {} left of the boundary", current.value),
                    "swap(arr[i], arr[j])",
                    vec![current.id, displaced.id],
                    vec![pivot.id],
                )?;
            }
            i += 1;
        }
    }

    if i != hi {
        let displaced = t.work[i];
        t.work.swap(i, hi);
        t.step(
            StepKind::Swap,
            format!("Place pivot {} at index {}", pivot.value, i),
            "swap(arr[i], arr[hi])",
            vec![pivot.id, displaced.id],
            Vec::new(),
        )?;
    }
    Ok(i)
}

pub fn merge_sort(items: &[Item], max_steps: usize) -> VizResult<Run> {
    let mut t = SequenceTracer::start(
        Algorithm::MergeSort,
        StructureKind::Array,
        items,
        max_steps,
        "merge_sort(arr, 0, n)",
    )?;
    let n = t.work.len();
    merge_sort_range(&mut t, 0, n)?;
    t.finish_sorted()
}

/// Sort the half-open range `lo..hi`
fn merge_sort_range(t: &mut SequenceTracer, lo: usize, hi: usize) -> VizResult<()> {
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    t.step(
        StepKind::Split,
        format!("Split indices {}..{} at {}", lo, hi, mid),
        "mid = (lo + hi) / 2",
        t.ids(lo..mid),
        t.ids(mid..hi),
    )?;
    merge_sort_range(t, lo, mid)?;
    merge_sort_range(t, mid, hi)?;
    merge(t, lo, mid, hi)
}

// The segment is rewritten as merged ++ rest-of-left ++ rest-of-right after
// every placement, so each snapshot stays a permutation of the input.
fn merge(t: &mut SequenceTracer, lo: usize, mid: usize, hi: usize) -> VizResult<()> {
    let left = t.work[lo..mid].to_vec();
    let right = t.work[mid..hi].to_vec();
    let mut merged: Vec<Item> = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let (a, b) = (left[i], right[j]);
        t.step(
            StepKind::Compare,
            format!("Compare {} and {}", a.value, b.value),
            "if left[i] <= right[j]",
            vec![a.id, b.id],
            merged.iter().map(|m| m.id).collect(),
        )?;
        let taken = if a.value <= b.value {
            i += 1;
            a
        } else {
            j += 1;
            b
        };
        merged.push(taken);
        write_segment(t, lo, &merged, &left[i..], &right[j..]);
        t.step(
            StepKind::Write,
            format!("Place {} at index {}", taken.value, lo + merged.len() - 1),
            if taken.id == a.id {
                "arr[k] = left[i++]"
            } else {
                "arr[k] = right[j++]"
            },
            vec![taken.id],
            merged.iter().map(|m| m.id).collect(),
        )?;
    }

    let rest: Vec<(Item, &str)> = left[i..]
        .iter()
        .map(|item| (*item, "arr[k] = left[i++]"))
        .chain(right[j..].iter().map(|item| (*item, "arr[k] = right[j++]")))
        .collect();
    for (item, annotation) in rest {
        merged.push(item);
        t.step(
            StepKind::Write,
            format!("Copy remaining {} to index {}", item.value, lo + merged.len() - 1),
            annotation,
            vec![item.id],
            merged.iter().map(|m| m.id).collect(),
        )?;
    }
    Ok(())
}

fn write_segment(t: &mut SequenceTracer, lo: usize, merged: &[Item], left: &[Item], right: &[Item]) {
    for (offset, item) in merged.iter().chain(left).chain(right).enumerate() {
        t.work[lo + offset] = *item;
    }
}
