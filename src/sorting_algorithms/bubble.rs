use crate::config::SortConfig;
use crate::element::Element;
use crate::ordering::Direction;
use crate::step::{Step, StepSequence};

/// Simulates bubble sort with the early-exit optimization and a shrinking
/// unsorted window, recording one narrated snapshot per interesting state.
pub struct BubbleSort {
    values: Vec<Element>,
    direction: Direction,
    detailed: bool,
    steps: Vec<Step>,
}

impl BubbleSort {
    pub fn new(config: &SortConfig) -> Self {
        BubbleSort {
            values: config.values.clone(),
            direction: config.direction,
            detailed: config.detailed,
            steps: Vec::new(),
        }
    }

    pub fn generate(mut self) -> StepSequence {
        self.steps.push(Step {
            array: self.values.clone(),
            description: "Starting with an unsorted array.".to_string(),
            ..Step::default()
        });

        let n = self.values.len();
        let mut sorted_elements = 0;
        loop {
            let swapped = self.run_pass(sorted_elements);
            sorted_elements += 1;

            // In detailed mode a pass that swapped skips this marker; the
            // sorted-count bookkeeping still advances.
            if !self.detailed || !swapped {
                let position = n - sorted_elements;
                self.steps.push(Step {
                    array: self.values.clone(),
                    final_position: Some(position),
                    sorted_count: Some(sorted_elements),
                    description: format!(
                        "Element {} is now in its final position.",
                        self.values[position]
                    ),
                    ..Step::default()
                });
            }

            if !swapped {
                if sorted_elements < n - 1 {
                    self.steps.push(Step {
                        array: self.values.clone(),
                        sorted_count: Some(n),
                        description: "No swaps needed in this pass. The array is sorted!"
                            .to_string(),
                        ..Step::default()
                    });
                }
                break;
            }
            if sorted_elements >= n - 1 {
                break;
            }
        }

        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(n),
            description: "The array is now fully sorted.".to_string(),
            ..Step::default()
        });

        StepSequence::new(self.steps)
    }

    /// One pass over the unsorted window. Returns whether anything swapped.
    fn run_pass(&mut self, sorted_elements: usize) -> bool {
        let n = self.values.len();
        let description = if sorted_elements == 0 {
            format!("Starting pass {} through the array.", sorted_elements + 1)
        } else {
            format!(
                "A swap was needed in the previous pass, so we need another pass. Starting pass {}.",
                sorted_elements + 1
            )
        };
        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(sorted_elements),
            description,
            ..Step::default()
        });

        let mut swapped = false;
        for i in 0..n - 1 - sorted_elements {
            if self.detailed {
                self.steps.push(Step {
                    array: self.values.clone(),
                    current: Some(i),
                    compared: Some(i + 1),
                    sorted_count: Some(sorted_elements),
                    description: format!(
                        "Comparing {} and {}.",
                        self.values[i],
                        self.values[i + 1]
                    ),
                    ..Step::default()
                });
            }

            if self.direction.precedes(self.values[i + 1], self.values[i]) {
                self.values.swap(i, i + 1);
                swapped = true;
                let reason = if self.direction.is_ascending() {
                    "greater"
                } else {
                    "smaller"
                };
                self.steps.push(Step {
                    array: self.values.clone(),
                    current: Some(i + 1),
                    compared: Some(i),
                    swapped: true,
                    sorted_count: Some(sorted_elements),
                    description: format!(
                        "Swapped {} and {} because {} is {}.",
                        self.values[i],
                        self.values[i + 1],
                        self.values[i + 1],
                        reason
                    ),
                    ..Step::default()
                });
            } else if self.detailed {
                let relation = if self.direction.is_ascending() {
                    "smaller or equal to"
                } else {
                    "greater or equal to"
                };
                self.steps.push(Step {
                    array: self.values.clone(),
                    current: Some(i),
                    compared: Some(i + 1),
                    sorted_count: Some(sorted_elements),
                    description: format!(
                        "No swap needed. {} is already {} {}.",
                        self.values[i],
                        relation,
                        self.values[i + 1]
                    ),
                    ..Step::default()
                });
            }
        }
        swapped
    }
}
