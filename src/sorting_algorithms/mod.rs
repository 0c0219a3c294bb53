pub mod bubble;
pub mod insertion;
pub mod mergesort;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use mergesort::{merge_sorted, MergeSort};

use crate::config::{Algorithm, SortConfig};
use crate::step::StepSequence;

/// Runs the generator matching the configured algorithm to completion. Pure
/// with respect to the config: each call starts from a fresh working copy.
pub fn generate_steps(config: &SortConfig) -> StepSequence {
    match config.algorithm {
        Algorithm::Insertion => InsertionSort::new(config).generate(),
        Algorithm::Bubble => BubbleSort::new(config).generate(),
        Algorithm::Merge => MergeSort::new(config).generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::ordering::Direction;
    use crate::step::Phase;

    fn nums(values: &[u8]) -> Vec<Element> {
        values.iter().map(|&n| Element::Number(n)).collect()
    }

    fn config(algorithm: Algorithm, direction: Direction, detailed: bool) -> SortConfig {
        SortConfig::with_values(algorithm, direction, detailed, nums(&[5, 2, 9, 1, 7, 3]))
    }

    #[test]
    fn dispatches_to_the_configured_algorithm() {
        let merge = generate_steps(&config(Algorithm::Merge, Direction::Ascending, false));
        assert!(merge.steps.iter().all(|step| step.phase.is_some()));

        let insertion = generate_steps(&config(Algorithm::Insertion, Direction::Ascending, false));
        assert!(insertion.steps.iter().any(|step| step.is_pass_header));
        assert!(insertion.steps.iter().all(|step| step.phase.is_none()));

        let bubble = generate_steps(&config(Algorithm::Bubble, Direction::Ascending, false));
        assert!(bubble.steps.iter().any(|step| step.final_position.is_some()));
    }

    #[test]
    fn every_run_brackets_the_input_with_a_sorted_result() {
        for algorithm in [Algorithm::Insertion, Algorithm::Bubble, Algorithm::Merge] {
            for direction in [Direction::Ascending, Direction::Descending] {
                for detailed in [false, true] {
                    let config = config(algorithm, direction, detailed);
                    let sequence = generate_steps(&config);
                    assert_eq!(sequence.first().array, config.values);
                    assert!(
                        direction.is_ordered(&sequence.last().array),
                        "{:?} {:?} detailed={} ended unsorted",
                        algorithm,
                        direction,
                        detailed
                    );
                    assert_eq!(sequence.max_index, sequence.len() - 1);
                }
            }
        }
    }

    #[test]
    fn verbosity_only_adds_steps() {
        for algorithm in [Algorithm::Insertion, Algorithm::Bubble, Algorithm::Merge] {
            for direction in [Direction::Ascending, Direction::Descending] {
                let simple = generate_steps(&config(algorithm, direction, false));
                let detailed = generate_steps(&config(algorithm, direction, true));
                assert!(simple.len() <= detailed.len());
                assert_eq!(simple.first().array, detailed.first().array);
                assert_eq!(simple.last().array, detailed.last().array);
            }
        }
    }

    #[test]
    fn direction_flip_reverses_the_terminal_order() {
        for algorithm in [Algorithm::Insertion, Algorithm::Bubble, Algorithm::Merge] {
            let ascending = generate_steps(&config(algorithm, Direction::Ascending, false));
            let descending = generate_steps(&config(algorithm, Direction::Descending, false));
            let mut reversed = ascending.last().array.clone();
            reversed.reverse();
            assert_eq!(descending.last().array, reversed);
        }
    }

    #[test]
    fn merge_steps_keep_phase_order() {
        let sequence = generate_steps(&config(Algorithm::Merge, Direction::Ascending, true));
        let first_merging = sequence
            .steps
            .iter()
            .position(|step| step.phase == Some(Phase::Merging))
            .expect("no merging steps");
        assert!(sequence.steps[..first_merging]
            .iter()
            .all(|step| step.phase == Some(Phase::Dividing)));
        assert!(sequence.steps[first_merging..]
            .iter()
            .all(|step| step.phase == Some(Phase::Merging)));
    }
}
