use crate::element::Element;

/// Inclusive index range of a contiguous subarray, tracked while merge sort
/// divides and recombines the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn single(index: usize) -> Self {
        Span { start: index, end: index }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Which half of a merge-sort run a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dividing,
    Merging,
}

/// One narrated snapshot of an algorithm's progress.
///
/// `array` and `description` are always present. Every other field is set
/// only where the emitting algorithm's contract says so, and the renderer
/// ignores whatever is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    /// Full copy of the array at this instant. Never mutated once stored.
    pub array: Vec<Element>,
    pub description: String,
    /// Elements known to be in final position: a prefix count for insertion
    /// sort, a suffix count for bubble sort.
    pub sorted_count: Option<usize>,
    /// Index of the element in hand.
    pub current: Option<usize>,
    /// Index being compared against.
    pub compared: Option<usize>,
    pub pass_number: Option<usize>,
    pub is_pass_header: bool,
    /// Where the scanned element will land (insertion sort, detailed mode).
    pub insertion_point: Option<usize>,
    /// Left neighbor of an element that landed at the tail of the sorted
    /// prefix, for arrow rendering (insertion sort, detailed mode).
    pub inserted_after: Option<usize>,
    pub swapped: bool,
    /// Index that just became fixed after a bubble pass.
    pub final_position: Option<usize>,
    pub phase: Option<Phase>,
    /// Merge sort's current partition of the array, sorted by start index.
    pub subarrays: Option<Vec<Span>>,
    pub merging_left: Option<Span>,
    pub merging_right: Option<Span>,
    pub comparing_left: Option<usize>,
    pub comparing_right: Option<usize>,
    /// Last position filled while merging a pair.
    pub selected: Option<usize>,
}

/// The complete ordered output of one generation run, chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequence {
    pub steps: Vec<Step>,
    pub max_index: usize,
}

impl StepSequence {
    /// Every generator emits an initial step before anything else, so
    /// `steps` is never empty.
    pub fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty());
        let max_index = steps.len() - 1;
        StepSequence { steps, max_index }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.max_index]
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}
