use std::collections::BTreeSet;

use crate::generator::FrameEmitter;
use crate::renderers::RenderError;

/// Insertion sort. Slot `i` is highlighted, then joins `done`, then sinks
/// left one swap per frame. The slot being compared against is drawn as
/// unsorted while it is highlighted.
pub(crate) fn sort(values: &mut [f64], out: &mut FrameEmitter<'_>) -> Result<(), RenderError> {
    let len = values.len();
    let mut done = BTreeSet::new();
    for i in 0..len {
        out.emit(out.frame(values).with_highlight([i]).with_done(&done))?;
        done.insert(i);
        for j in (0..i).rev() {
            let shift = values[j + 1] < values[j];
            if shift {
                values.swap(j, j + 1);
            }
            out.emit(out.frame(values).with_highlight([j]).with_done_except(&done, j))?;
            if !shift {
                break;
            }
        }
        out.emit(out.frame(values).with_done(&done))?;
    }
    out.emit(out.frame(values).with_done(&done))
}

#[cfg(test)]
mod tests {
    use crate::algorithm::SortAlgorithm;
    use crate::sorts::testing::{animate, set};

    #[test]
    fn two_element_walkthrough() {
        let (sorted, frames) = animate(SortAlgorithm::Insertion, &[2.0, 1.0]);
        assert_eq!(sorted, vec![1.0, 2.0]);

        // initial, i=0 highlight, i=0 settled, i=1 highlight, shift j=0,
        // i=1 settled, final
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[3].highlight, set(&[1]));
        assert_eq!(frames[3].done, set(&[0]));

        let shifted = &frames[4];
        assert_eq!(shifted.values, vec![1.0, 2.0]);
        assert_eq!(shifted.highlight, set(&[0]));
        assert_eq!(shifted.done, set(&[1]));

        assert_eq!(frames[5].done, set(&[0, 1]));
        assert_eq!(frames[6].done, set(&[0, 1]));
    }

    #[test]
    fn stops_at_first_smaller_neighbour() {
        let (sorted, frames) = animate(SortAlgorithm::Insertion, &[1.0, 4.0, 3.0]);
        assert_eq!(sorted, vec![1.0, 3.0, 4.0]);
        assert_eq!(frames.len(), 11);

        // i = 2: 3 passes 4 ...
        assert_eq!(frames[7].values, vec![1.0, 3.0, 4.0]);
        assert_eq!(frames[7].highlight, set(&[1]));
        assert_eq!(frames[7].done, set(&[0, 2]));
        // ... and the comparison against 1 ends the shift.
        assert_eq!(frames[8].highlight, set(&[0]));
        assert_eq!(frames[8].done, set(&[1, 2]));
        assert_eq!(frames[9].done, set(&[0, 1, 2]));
        assert!(frames[9].highlight.is_empty());
    }

    #[test]
    fn already_sorted_input_compares_once_per_step() {
        let n = 5;
        let input: Vec<f64> = (0..n).map(|v| v as f64).collect();
        let (_, frames) = animate(SortAlgorithm::Insertion, &input);
        // initial + per i (highlight, settled, one comparison for i > 0) + final
        assert_eq!(frames.len(), 1 + 2 * n + (n - 1) + 1);
    }
}
