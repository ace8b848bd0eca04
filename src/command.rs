//! Text commands typed into the input line or passed with `--run`
//!
//! A command is a keyword followed by whitespace separated integers, e.g.
//! `push 5`, `insert 2 40`, `bfs 1 3`. Some keywords depend on the current
//! structure: `find N` picks linear, list or BST search and `delete N` means
//! "delete index N" for arrays and lists but "delete key N" for a tree.

use crate::algorithms::Algorithm;
use crate::errors::{VizError, VizResult};
use crate::structures::{Operation, StructureKind, Value};
use std::ops::RangeInclusive;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mutate the live structure
    Operation(Operation),
    /// Record a run over the live structure
    Algorithm(Algorithm),
}

/// Keywords and their argument shapes, shown by the help line
pub const USAGE: &[&str] = &[
    "push N",
    "pop",
    "peek",
    "enqueue N",
    "dequeue",
    "append N",
    "insert N | insert I N",
    "delete N | delete I",
    "remove N",
    "set I N",
    "random LEN [MIN MAX]",
    "node N",
    "edge A B",
    "unlink A B",
    "drop N",
    "clear",
    "bubble",
    "quick",
    "merge",
    "find N",
    "bsearch N",
    "inorder",
    "preorder",
    "postorder",
    "bfs A B",
    "dfs A B",
];

struct Args<'a> {
    input: &'a str,
    words: Vec<&'a str>,
}

impl Args<'_> {
    fn count(&self) -> usize {
        self.words.len() - 1
    }

    fn value(&self, position: usize) -> VizResult<Value> {
        let word = self.words[position];
        word.parse::<Value>()
            .map_err(|_| VizError::not_a_number(word))
    }

    fn index(&self, position: usize) -> VizResult<usize> {
        let word = self.words[position];
        word.parse::<usize>().map_err(|_| VizError::InvalidInput {
            input: word.to_string(),
            reason: "expected a non-negative index".to_string(),
        })
    }

    fn length(&self, position: usize) -> VizResult<usize> {
        let word = self.words[position];
        word.parse::<usize>().map_err(|_| VizError::InvalidInput {
            input: word.to_string(),
            reason: "expected a non-negative length".to_string(),
        })
    }

    fn arity(&self, expected: usize, usage: &str) -> VizResult<()> {
        if self.count() != expected {
            return Err(self.usage(usage));
        }
        Ok(())
    }

    fn usage(&self, usage: &str) -> VizError {
        VizError::InvalidInput {
            input: self.input.to_string(),
            reason: format!("usage: {}", usage),
        }
    }
}

/// Parse one command line against the current structure kind
///
/// `random LEN` without bounds draws from `random_range`.
pub fn parse(
    input: &str,
    kind: StructureKind,
    random_range: &RangeInclusive<Value>,
) -> VizResult<Command> {
    let trimmed = input.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(keyword) = words.first().map(|w| w.to_ascii_lowercase()) else {
        return Err(VizError::InvalidInput {
            input: String::new(),
            reason: "empty command".to_string(),
        });
    };
    let args = Args {
        input: trimmed,
        words,
    };

    let op = |operation: Operation| -> VizResult<Command> { Ok(Command::Operation(operation)) };
    let algo = |algorithm: Algorithm| -> VizResult<Command> { Ok(Command::Algorithm(algorithm)) };

    match keyword.as_str() {
        "push" => {
            args.arity(1, "push N")?;
            op(Operation::Push(args.value(1)?))
        }
        "pop" => {
            args.arity(0, "pop")?;
            op(Operation::Pop)
        }
        "peek" | "front" => {
            args.arity(0, "peek")?;
            op(Operation::Peek)
        }
        "enqueue" => {
            args.arity(1, "enqueue N")?;
            op(Operation::Enqueue(args.value(1)?))
        }
        "dequeue" => {
            args.arity(0, "dequeue")?;
            op(Operation::Dequeue)
        }
        "append" | "add" => {
            args.arity(1, "append N")?;
            op(Operation::Append(args.value(1)?))
        }
        "insert" => match args.count() {
            1 => op(Operation::Insert(args.value(1)?)),
            2 => op(Operation::InsertAt {
                index: args.index(1)?,
                value: args.value(2)?,
            }),
            _ => Err(args.usage("insert N | insert I N")),
        },
        "delete" | "del" => {
            args.arity(1, "delete N | delete I")?;
            if kind == StructureKind::Tree {
                op(Operation::Delete(args.value(1)?))
            } else {
                op(Operation::DeleteAt {
                    index: args.index(1)?,
                })
            }
        }
        "remove" => {
            args.arity(1, "remove N")?;
            op(Operation::RemoveValue(args.value(1)?))
        }
        "set" | "update" => {
            args.arity(2, "set I N")?;
            op(Operation::UpdateAt {
                index: args.index(1)?,
                value: args.value(2)?,
            })
        }
        "random" | "rand" => {
            let (min, max) = match args.count() {
                1 => (*random_range.start(), *random_range.end()),
                3 => (args.value(2)?, args.value(3)?),
                _ => return Err(args.usage("random LEN [MIN MAX]")),
            };
            op(Operation::Randomize {
                len: args.length(1)?,
                min,
                max,
            })
        }
        "node" => {
            args.arity(1, "node N")?;
            op(Operation::AddNode(args.value(1)?))
        }
        "edge" | "link" => {
            args.arity(2, "edge A B")?;
            op(Operation::AddEdge(args.value(1)?, args.value(2)?))
        }
        "unlink" => {
            args.arity(2, "unlink A B")?;
            op(Operation::RemoveEdge(args.value(1)?, args.value(2)?))
        }
        "drop" => {
            args.arity(1, "drop N")?;
            op(Operation::RemoveNode(args.value(1)?))
        }
        "clear" => {
            args.arity(0, "clear")?;
            op(Operation::Clear)
        }
        "bubble" => {
            args.arity(0, "bubble")?;
            algo(Algorithm::BubbleSort)
        }
        "quick" => {
            args.arity(0, "quick")?;
            algo(Algorithm::QuickSort)
        }
        "merge" => {
            args.arity(0, "merge")?;
            algo(Algorithm::MergeSort)
        }
        "find" | "search" => {
            args.arity(1, "find N")?;
            let target = args.value(1)?;
            match kind {
                StructureKind::Array => algo(Algorithm::LinearSearch { target }),
                StructureKind::LinkedList => algo(Algorithm::ListSearch { target }),
                StructureKind::Tree => algo(Algorithm::BstSearch { target }),
                _ => Err(VizError::UnsupportedAlgorithm {
                    algorithm: "search",
                    kind,
                }),
            }
        }
        "bsearch" => {
            args.arity(1, "bsearch N")?;
            algo(Algorithm::BinarySearch {
                target: args.value(1)?,
            })
        }
        "inorder" => {
            args.arity(0, "inorder")?;
            algo(Algorithm::InOrder)
        }
        "preorder" => {
            args.arity(0, "preorder")?;
            algo(Algorithm::PreOrder)
        }
        "postorder" => {
            args.arity(0, "postorder")?;
            algo(Algorithm::PostOrder)
        }
        "bfs" => {
            args.arity(2, "bfs A B")?;
            algo(Algorithm::BreadthFirst {
                start: args.value(1)?,
                end: args.value(2)?,
            })
        }
        "dfs" => {
            args.arity(2, "dfs A B")?;
            algo(Algorithm::DepthFirst {
                start: args.value(1)?,
                end: args.value(2)?,
            })
        }
        _ => Err(VizError::InvalidInput {
            input: trimmed.to_string(),
            reason: "unknown command".to_string(),
        }),
    }
}
