use crate::config::SortConfig;
use crate::element::Element;
use crate::ordering::Direction;
use crate::step::{Step, StepSequence};

/// Simulates insertion sort over a working copy of the array, recording one
/// narrated snapshot per interesting state. Each pass lifts `values[i]` out
/// and splices it back into the sorted prefix `[0, i)`.
pub struct InsertionSort {
    values: Vec<Element>,
    direction: Direction,
    detailed: bool,
    steps: Vec<Step>,
}

impl InsertionSort {
    pub fn new(config: &SortConfig) -> Self {
        InsertionSort {
            values: config.values.clone(),
            direction: config.direction,
            detailed: config.detailed,
            steps: Vec::new(),
        }
    }

    pub fn generate(mut self) -> StepSequence {
        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(1),
            description: format!(
                "The first element {} is already sorted. The rest are unsorted and will be inserted one by one.",
                self.values[0]
            ),
            ..Step::default()
        });

        for i in 1..self.values.len() {
            self.insert_pass(i);
        }

        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(self.values.len()),
            description: "The array is now fully sorted.".to_string(),
            ..Step::default()
        });

        StepSequence::new(self.steps)
    }

    fn insert_pass(&mut self, i: usize) {
        let current = self.values[i];

        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(i),
            current: Some(i),
            pass_number: Some(i),
            is_pass_header: true,
            description: format!("Pass {}: First unsorted element is {}.", i, current),
            ..Step::default()
        });

        let position = if self.detailed {
            self.find_position_detailed(i, current)
        } else {
            self.find_position(i, current)
        };

        // Splice out at i, splice back in at the found slot.
        let value = self.values.remove(i);
        self.values.insert(position, value);

        let (description, inserted_after) = self.insertion_summary(i, position, current);
        self.steps.push(Step {
            array: self.values.clone(),
            sorted_count: Some(i + 1),
            current: Some(position),
            inserted_after,
            description,
            ..Step::default()
        });
    }

    /// Scans the sorted prefix right to left for the slot `current` goes in.
    fn find_position(&self, i: usize, current: Element) -> usize {
        let mut slot = i;
        while slot > 0 && self.direction.precedes(current, self.values[slot - 1]) {
            slot -= 1;
        }
        slot
    }

    /// Same scan, but narrating every probe, plus a step announcing where
    /// the scan settled (unless the element stays at the prefix tail).
    fn find_position_detailed(&mut self, i: usize, current: Element) -> usize {
        let mut slot = i;
        while slot > 0 {
            let neighbor = self.values[slot - 1];
            let keep_scanning = self.direction.precedes(current, neighbor);
            let verdict = match (self.direction.is_ascending(), keep_scanning) {
                (true, true) => "smaller, so continue searching left",
                (true, false) => "larger or equal, so insertion point found",
                (false, true) => "larger, so continue searching left",
                (false, false) => "smaller or equal, so insertion point found",
            };
            self.steps.push(Step {
                array: self.values.clone(),
                sorted_count: Some(i),
                current: Some(i),
                compared: Some(slot - 1),
                description: format!(
                    "Comparing {} with {}. {} is {}.",
                    current, neighbor, current, verdict
                ),
                ..Step::default()
            });
            if keep_scanning {
                slot -= 1;
            } else {
                break;
            }
        }

        if slot == 0 {
            let side = if self.direction.is_ascending() {
                "smaller"
            } else {
                "larger"
            };
            self.steps.push(Step {
                array: self.values.clone(),
                sorted_count: Some(i),
                current: Some(i),
                insertion_point: Some(0),
                description: format!(
                    "{} is {} than all elements in the sorted portion, so goes at the beginning.",
                    current, side
                ),
                ..Step::default()
            });
        } else if slot < i {
            self.steps.push(Step {
                array: self.values.clone(),
                sorted_count: Some(i),
                current: Some(i),
                insertion_point: Some(slot),
                description: format!(
                    "Found insertion point for {} at position {}.",
                    current, slot
                ),
                ..Step::default()
            });
        }
        slot
    }

    /// Names the neighbors the value now sits between. Runs after the splice.
    fn insertion_summary(
        &self,
        i: usize,
        position: usize,
        current: Element,
    ) -> (String, Option<usize>) {
        if position == 0 {
            (
                format!("Inserted {} before {}.", current, self.values[1]),
                None,
            )
        } else if position == i {
            let inserted_after = if self.detailed { Some(position - 1) } else { None };
            (
                format!("Inserted {} after {}.", current, self.values[position - 1]),
                inserted_after,
            )
        } else {
            (
                format!(
                    "Inserted {} after {} and before {}.",
                    current,
                    self.values[position - 1],
                    self.values[position + 1]
                ),
                None,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Algorithm;

    fn nums(values: &[u8]) -> Vec<Element> {
        values.iter().map(|&n| Element::Number(n)).collect()
    }

    fn generate(values: &[u8], direction: Direction, detailed: bool) -> StepSequence {
        let config = SortConfig::with_values(
            Algorithm::Insertion,
            direction,
            detailed,
            nums(values),
        );
        InsertionSort::new(&config).generate()
    }

    #[test]
    fn sorts_3_1_2_in_simple_mode() {
        let sequence = generate(&[3, 1, 2], Direction::Ascending, false);
        assert_eq!(sequence.first().array, nums(&[3, 1, 2]));
        assert_eq!(sequence.last().array, nums(&[1, 2, 3]));
        assert_eq!(sequence.last().sorted_count, Some(3));
        assert_eq!(sequence.last().current, None);
    }

    #[test]
    fn simple_mode_emits_two_steps_per_element() {
        // Initial + terminal + (header, inserted) per pass: always 2 * len.
        for values in [&[3, 1, 2][..], &[9, 8, 7, 6, 5][..], &[1, 2][..]] {
            for direction in [Direction::Ascending, Direction::Descending] {
                let sequence = generate(values, direction, false);
                assert_eq!(sequence.len(), 2 * values.len());
            }
        }
    }

    #[test]
    fn single_element_yields_initial_and_terminal_only() {
        let sequence = generate(&[5], Direction::Ascending, true);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.first().sorted_count, Some(1));
        assert_eq!(sequence.last().sorted_count, Some(1));
        assert_eq!(sequence.last().description, "The array is now fully sorted.");
    }

    #[test]
    fn detailed_mode_narrates_the_scan() {
        let sequence = generate(&[3, 1, 2], Direction::Ascending, true);
        let descriptions: Vec<&str> = sequence
            .steps
            .iter()
            .map(|step| step.description.as_str())
            .collect();

        // Pass 1 scans past 3 and hits the front.
        assert!(descriptions
            .contains(&"Comparing 1 with 3. 1 is smaller, so continue searching left."));
        assert!(descriptions.contains(
            &"1 is smaller than all elements in the sorted portion, so goes at the beginning."
        ));
        // Pass 2 stops between 1 and 3.
        assert!(descriptions
            .contains(&"Comparing 2 with 1. 2 is larger or equal, so insertion point found."));
        assert!(descriptions.contains(&"Found insertion point for 2 at position 1."));
        assert!(descriptions.contains(&"Inserted 2 after 1 and before 3."));
    }

    #[test]
    fn detailed_mode_marks_tail_insertions() {
        let sequence = generate(&[1, 2, 3], Direction::Ascending, true);
        let inserted: Vec<&Step> = sequence
            .steps
            .iter()
            .filter(|step| step.description.starts_with("Inserted"))
            .collect();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].description, "Inserted 2 after 1.");
        assert_eq!(inserted[0].inserted_after, Some(0));
        assert_eq!(inserted[1].description, "Inserted 3 after 2.");
        assert_eq!(inserted[1].inserted_after, Some(1));
    }

    #[test]
    fn simple_mode_leaves_tail_marker_unset() {
        let sequence = generate(&[1, 2, 3], Direction::Ascending, false);
        assert!(sequence.steps.iter().all(|step| step.inserted_after.is_none()));
    }

    #[test]
    fn pass_headers_identify_the_element_in_hand() {
        let sequence = generate(&[3, 1, 2], Direction::Ascending, false);
        let headers: Vec<&Step> = sequence
            .steps
            .iter()
            .filter(|step| step.is_pass_header)
            .collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].description, "Pass 1: First unsorted element is 1.");
        assert_eq!(headers[0].pass_number, Some(1));
        assert_eq!(headers[0].current, Some(1));
        assert_eq!(headers[1].description, "Pass 2: First unsorted element is 2.");
    }

    #[test]
    fn descending_mirrors_the_order_and_wording() {
        let sequence = generate(&[1, 3, 2], Direction::Descending, true);
        assert_eq!(sequence.last().array, nums(&[3, 2, 1]));
        let descriptions: Vec<&str> = sequence
            .steps
            .iter()
            .map(|step| step.description.as_str())
            .collect();
        assert!(descriptions
            .contains(&"Comparing 3 with 1. 3 is larger, so continue searching left."));
        assert!(descriptions.contains(
            &"3 is larger than all elements in the sorted portion, so goes at the beginning."
        ));
    }

    #[test]
    fn detailed_mode_is_never_shorter_and_shares_endpoints() {
        for direction in [Direction::Ascending, Direction::Descending] {
            let simple = generate(&[4, 2, 7, 1, 3], direction, false);
            let detailed = generate(&[4, 2, 7, 1, 3], direction, true);
            assert!(simple.len() <= detailed.len());
            assert_eq!(simple.first().array, detailed.first().array);
            assert_eq!(simple.last().array, detailed.last().array);
        }
    }

    #[test]
    fn sorts_letters_too() {
        let values = vec![
            Element::Letter('C'),
            Element::Letter('A'),
            Element::Letter('B'),
        ];
        let config =
            SortConfig::with_values(Algorithm::Insertion, Direction::Ascending, false, values);
        let sequence = InsertionSort::new(&config).generate();
        assert_eq!(
            sequence.last().array,
            vec![
                Element::Letter('A'),
                Element::Letter('B'),
                Element::Letter('C'),
            ]
        );
        assert!(sequence
            .steps
            .iter()
            .any(|step| step.description == "Pass 1: First unsorted element is A."));
    }
}
