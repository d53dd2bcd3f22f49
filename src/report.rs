//! Serializable results of running the exercises, plus the fixed demonstrations.

use std::fmt;

use serde::Serialize;

use crate::{merge_sorted::merge, remove_element::retained};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub input_a: Vec<i64>,
    pub m: usize,
    pub input_b: Vec<i64>,
    pub n: usize,
    pub merged: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveReport {
    /// Values as given, before compaction
    pub input: Vec<i64>,
    /// Value that was removed
    pub target: i64,
    /// Number of values left after removing `target`
    pub kept: usize,
    /// The kept values in their original order, always `kept` long
    pub retained: Vec<i64>,
}

/// Merges `b[..n]` into a copy of `a` and records both inputs next to the result.
///
/// `merged` holds the whole of `a` after the merge, spare capacity included.
pub fn merge_report(a: Vec<i64>, m: usize, b: Vec<i64>, n: usize) -> anyhow::Result<MergeReport> {
    let mut merged = a.clone();
    merge(&mut merged, m, &b, n)?;
    Ok(MergeReport {
        input_a: a,
        m,
        input_b: b,
        n,
        merged,
    })
}

pub fn remove_report(values: Vec<i64>, target: i64) -> RemoveReport {
    let mut compacted = values.clone();
    let kept_values = retained(&mut compacted, target).to_vec();
    RemoveReport {
        input: values,
        target,
        kept: kept_values.len(),
        retained: kept_values,
    }
}

pub fn merge_demo() -> anyhow::Result<MergeReport> {
    merge_report(vec![1, 2, 3, 0, 0, 0], 3, vec![2, 5, 6], 3)
}

pub fn remove_demo() -> RemoveReport {
    remove_report(vec![0, 1, 2, 2, 3, 0, 4, 2], 2)
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.merged)
    }
}

impl fmt::Display for RemoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kept)
    }
}
