use std::collections::BTreeSet;

use crate::generator::FrameEmitter;
use crate::renderers::RenderError;

/// Selection sort. Every inner comparison shows the scanned slot highlighted
/// and the current minimum candidate under the pointer; after each swap the
/// placed slot joins `done`.
pub(crate) fn sort(values: &mut [f64], out: &mut FrameEmitter<'_>) -> Result<(), RenderError> {
    let len = values.len();
    let mut done = BTreeSet::new();
    for i in 0..len {
        let mut min_index = i;
        for j in i..len {
            out.emit(
                out.frame(values)
                    .with_highlight([j])
                    .with_done(&done)
                    .with_pointer(min_index),
            )?;
            // Strict: the first minimum found stays the candidate.
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
        done.insert(i);
        out.emit(out.frame(values).with_done(&done))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithm::SortAlgorithm;
    use crate::sorts::testing::{animate, set};

    #[test]
    fn first_outer_step_moves_minimum_to_front() {
        let (sorted, frames) = animate(SortAlgorithm::Selection, &[5.0, 2.0, 4.0]);
        assert_eq!(sorted, vec![2.0, 4.0, 5.0]);

        // Scan j = 0, 1, 2 with the pointer tracking the candidate.
        let pointers: Vec<_> = frames[1..4].iter().map(|f| f.pointer).collect();
        assert_eq!(pointers, vec![Some(0), Some(0), Some(1)]);
        let highlights: Vec<_> = frames[1..4].iter().map(|f| f.highlight.clone()).collect();
        assert_eq!(highlights, vec![set(&[0]), set(&[1]), set(&[2])]);

        let placed = &frames[4];
        assert_eq!(placed.values, vec![2.0, 5.0, 4.0]);
        assert_eq!(placed.done, set(&[0]));
        assert!(placed.highlight.is_empty());
        assert_eq!(placed.pointer, None);
    }

    #[test]
    fn frame_count_is_quadratic() {
        for n in 1..8usize {
            let input: Vec<f64> = (0..n).rev().map(|v| v as f64).collect();
            let (_, frames) = animate(SortAlgorithm::Selection, &input);
            assert_eq!(frames.len(), 1 + n * (n + 1) / 2 + n);
        }
    }

    #[test]
    fn equal_values_keep_first_candidate() {
        let (_, frames) = animate(SortAlgorithm::Selection, &[1.0, 1.0]);
        // Second scan frame of the first pass still points at index 0.
        assert_eq!(frames[2].pointer, Some(0));
    }
}
