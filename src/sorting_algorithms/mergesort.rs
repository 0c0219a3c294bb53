use crate::config::SortConfig;
use crate::element::{join_values, Element};
use crate::ordering::Direction;
use crate::step::{Phase, Span, Step, StepSequence};

/// Merges two sequences already ordered per `direction` into one. Ties take
/// from `left`, which keeps the merge stable. Emits no steps.
pub fn merge_sorted(left: &[Element], right: &[Element], direction: Direction) -> Vec<Element> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut li = 0;
    let mut ri = 0;
    while li < left.len() && ri < right.len() {
        if direction.precedes(right[ri], left[li]) {
            merged.push(right[ri]);
            ri += 1;
        } else {
            merged.push(left[li]);
            li += 1;
        }
    }
    merged.extend_from_slice(&left[li..]);
    merged.extend_from_slice(&right[ri..]);
    merged
}

/// Simulates merge sort in two phases over a worklist of spans: dividing the
/// array down to size-1 spans, then merging adjacent pairs bottom-up until a
/// single span remains. Both phases keep their span lists sorted by start
/// index, and at every step the listed spans partition the whole array.
pub struct MergeSort {
    values: Vec<Element>,
    direction: Direction,
    detailed: bool,
    steps: Vec<Step>,
}

impl MergeSort {
    pub fn new(config: &SortConfig) -> Self {
        MergeSort {
            values: config.values.clone(),
            direction: config.direction,
            detailed: config.detailed,
            steps: Vec::new(),
        }
    }

    pub fn generate(mut self) -> StepSequence {
        self.divide();
        self.merge_rounds();
        StepSequence::new(self.steps)
    }

    fn divide(&mut self) {
        let len = self.values.len();
        self.steps.push(Step {
            array: self.values.clone(),
            subarrays: Some(vec![Span::new(0, len - 1)]),
            phase: Some(Phase::Dividing),
            description:
                "Starting with the original array. We'll divide it into smaller subarrays."
                    .to_string(),
            ..Step::default()
        });

        if self.detailed && len > 1 {
            let mut working = vec![Span::new(0, len - 1)];
            while working.iter().any(|span| !span.is_single()) {
                let mut split = Vec::with_capacity(working.len() * 2);
                for &span in &working {
                    if span.is_single() {
                        split.push(span);
                    } else {
                        // Odd spans give the extra element to the left half.
                        let mid = (span.start + span.end) / 2;
                        split.push(Span::new(span.start, mid));
                        split.push(Span::new(mid + 1, span.end));
                    }
                }
                split.sort_by_key(|span| span.start);
                self.steps.push(Step {
                    array: self.values.clone(),
                    subarrays: Some(split.clone()),
                    phase: Some(Phase::Dividing),
                    description: Self::divide_description(&split),
                    ..Step::default()
                });
                working = split;
            }
        } else {
            self.steps.push(Step {
                array: self.values.clone(),
                subarrays: Some((0..len).map(Span::single).collect()),
                phase: Some(Phase::Dividing),
                description: "Array divided into individual subarrays of size 1.".to_string(),
                ..Step::default()
            });
        }
    }

    /// Summarizes a split round by the span sizes still larger than one.
    fn divide_description(spans: &[Span]) -> String {
        let mut sizes: Vec<usize> = spans
            .iter()
            .filter(|span| !span.is_single())
            .map(|span| span.len())
            .collect();
        if sizes.is_empty() {
            return "Array divided into individual subarrays of size 1.".to_string();
        }
        if sizes.iter().all(|&size| size == sizes[0]) {
            let noun = if sizes.len() == 1 { "subarray" } else { "subarrays" };
            format!(
                "Split arrays into smaller pieces. {} {} of size {} remaining.",
                sizes.len(),
                noun,
                sizes[0]
            )
        } else {
            sizes.sort_unstable_by(|a, b| b.cmp(a));
            format!(
                "Split arrays into smaller pieces. Remaining subarray sizes: {}.",
                join_sizes(&sizes)
            )
        }
    }

    fn merge_rounds(&mut self) {
        let len = self.values.len();
        let mut current: Vec<Span> = (0..len).map(Span::single).collect();

        while current.len() > 1 {
            let merged = if self.detailed {
                self.merge_round_detailed(&current)
            } else {
                self.merge_round_simple(&current)
            };

            // Detailed mode already narrated the round pair by pair; the
            // summary only reappears for the round that yields the final span.
            if !self.detailed || merged.len() == 1 {
                self.steps.push(Step {
                    array: self.values.clone(),
                    subarrays: Some(merged.clone()),
                    phase: Some(Phase::Merging),
                    description: Self::merge_description(&merged),
                    ..Step::default()
                });
            }
            current = merged;
        }
    }

    /// One bottom-up round, all pairs at once. An unpaired trailing span is
    /// carried over unchanged.
    fn merge_round_simple(&mut self, current: &[Span]) -> Vec<Span> {
        let mut next = Vec::with_capacity(current.len() / 2 + 1);
        let mut i = 0;
        while i < current.len() {
            if i + 1 < current.len() {
                let (left, right) = (current[i], current[i + 1]);
                let merged = merge_sorted(
                    &self.values[left.start..=left.end],
                    &self.values[right.start..=right.end],
                    self.direction,
                );
                self.values[left.start..=right.end].copy_from_slice(&merged);
                next.push(Span::new(left.start, right.end));
            } else {
                next.push(current[i]);
            }
            i += 2;
        }
        next
    }

    /// One bottom-up round, pairs processed strictly left to right, each
    /// producing its own sub-sequence of steps.
    fn merge_round_detailed(&mut self, current: &[Span]) -> Vec<Span> {
        let mut completed = Vec::with_capacity(current.len() / 2 + 1);
        let mut i = 0;
        while i < current.len() {
            if i + 1 < current.len() {
                let (left, right) = (current[i], current[i + 1]);
                self.merge_pair_detailed(left, right, &completed);
                completed.push(Span::new(left.start, right.end));
            } else {
                completed.push(current[i]);
            }
            i += 2;
        }
        completed
    }

    /// Narrates one left/right pair: the layout announcement, a comparison
    /// plus progress step per committed element, then one drain step per
    /// leftover element. The pair's region of the working array is only
    /// overwritten once the pair is done.
    fn merge_pair_detailed(&mut self, left: Span, right: Span, completed: &[Span]) {
        let left_values = self.values[left.start..=left.end].to_vec();
        let right_values = self.values[right.start..=right.end].to_vec();

        self.steps.push(Step {
            array: self.values.clone(),
            subarrays: Some(self.pair_layout(completed, left, right)),
            phase: Some(Phase::Merging),
            merging_left: Some(left),
            merging_right: Some(right),
            description: format!(
                "Merging [{}] and [{}].",
                join_values(&left_values),
                join_values(&right_values)
            ),
            ..Step::default()
        });

        let mut li = 0;
        let mut ri = 0;
        let mut merged = Vec::with_capacity(left_values.len() + right_values.len());

        while li < left_values.len() && ri < right_values.len() {
            let left_value = left_values[li];
            let right_value = right_values[ri];
            let take_left = !self.direction.precedes(right_value, left_value);
            let chosen = if take_left { left_value } else { right_value };
            let side_word = if self.direction.is_ascending() {
                "smaller"
            } else {
                "larger"
            };

            self.steps.push(Step {
                array: self.values.clone(),
                subarrays: Some(self.pair_layout(completed, left, right)),
                phase: Some(Phase::Merging),
                merging_left: Some(left),
                merging_right: Some(right),
                comparing_left: Some(left.start + li),
                comparing_right: Some(right.start + ri),
                description: format!(
                    "Comparing {} and {}. {} is {}, so it goes next.",
                    left_value, right_value, chosen, side_word
                ),
                ..Step::default()
            });

            if take_left {
                li += 1;
            } else {
                ri += 1;
            }
            merged.push(chosen);
            self.push_progress(
                PairProgress {
                    left,
                    right,
                    li,
                    ri,
                    left_len: left_values.len(),
                    right_len: right_values.len(),
                },
                completed,
                &merged,
                format!(
                    "Added {} to merged array. Progress: [{}].",
                    chosen,
                    join_values(&merged)
                ),
            );
        }

        while li < left_values.len() {
            let value = left_values[li];
            li += 1;
            merged.push(value);
            self.push_progress(
                PairProgress {
                    left,
                    right,
                    li,
                    ri,
                    left_len: left_values.len(),
                    right_len: right_values.len(),
                },
                completed,
                &merged,
                format!(
                    "Added remaining {} from left array. Progress: [{}].",
                    value,
                    join_values(&merged)
                ),
            );
        }

        while ri < right_values.len() {
            let value = right_values[ri];
            ri += 1;
            merged.push(value);
            self.push_progress(
                PairProgress {
                    left,
                    right,
                    li,
                    ri,
                    left_len: left_values.len(),
                    right_len: right_values.len(),
                },
                completed,
                &merged,
                format!(
                    "Added remaining {} from right array. Progress: [{}].",
                    value,
                    join_values(&merged)
                ),
            );
        }

        // Commit the pair's result for subsequent pairs and rounds.
        self.values[left.start..=right.end].copy_from_slice(&merged);
    }

    fn push_progress(
        &mut self,
        progress: PairProgress,
        completed: &[Span],
        merged: &[Element],
        description: String,
    ) {
        let spans = self.progress_layout(&progress, completed, merged.len());
        let mut array = self.values.clone();
        array[progress.left.start..progress.left.start + merged.len()].copy_from_slice(merged);
        self.steps.push(Step {
            array,
            subarrays: Some(spans),
            phase: Some(Phase::Merging),
            selected: Some(progress.left.start + merged.len() - 1),
            description,
            ..Step::default()
        });
    }

    /// Layout while a pair is being announced or compared: completed merges,
    /// the two active spans, and every other position as a size-1 span.
    fn pair_layout(&self, completed: &[Span], left: Span, right: Span) -> Vec<Span> {
        let mut spans = completed.to_vec();
        spans.push(left);
        spans.push(right);
        self.fill_uncovered(&mut spans);
        spans.sort_by_key(|span| span.start);
        spans
    }

    /// Layout after committing an element: the merged region so far, the
    /// untouched suffix of each side, completed merges, and every other
    /// position as a size-1 span.
    fn progress_layout(
        &self,
        progress: &PairProgress,
        completed: &[Span],
        merged_len: usize,
    ) -> Vec<Span> {
        let PairProgress { left, right, li, ri, left_len, right_len } = *progress;
        let mut spans = completed.to_vec();
        spans.push(Span::new(left.start, left.start + merged_len - 1));
        let left_rest = left.start + merged_len;
        if li < left_len && left_rest <= left.end {
            spans.push(Span::new(left_rest, left.end));
        }
        if ri < right_len {
            spans.push(Span::new(right.start + ri, right.end));
        }
        self.fill_uncovered(&mut spans);
        spans.sort_by_key(|span| span.start);
        spans
    }

    /// Pads a span list with size-1 spans so the union covers every index
    /// exactly once. The spans passed in are disjoint by construction.
    fn fill_uncovered(&self, spans: &mut Vec<Span>) {
        let mut covered = vec![false; self.values.len()];
        for span in spans.iter() {
            for index in span.start..=span.end {
                covered[index] = true;
            }
        }
        for (index, seen) in covered.iter().enumerate() {
            if !seen {
                spans.push(Span::single(index));
            }
        }
    }

    /// Summarizes a merge round by the resulting span count and sizes.
    fn merge_description(spans: &[Span]) -> String {
        if spans.len() == 1 {
            return format!("Merged into 1 sorted array of size {}.", spans[0].len());
        }
        let sizes: Vec<usize> = spans.iter().map(|span| span.len()).collect();
        if sizes.iter().all(|&size| size == sizes[0]) {
            format!(
                "Merged into {} sorted arrays of size {}.",
                spans.len(),
                sizes[0]
            )
        } else {
            format!(
                "Merged into {} sorted arrays of sizes {}.",
                spans.len(),
                join_sizes(&sizes)
            )
        }
    }
}

/// Where one pairwise merge stands: how far each side has been consumed.
#[derive(Clone, Copy)]
struct PairProgress {
    left: Span,
    right: Span,
    li: usize,
    ri: usize,
    left_len: usize,
    right_len: usize,
}

fn join_sizes(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
