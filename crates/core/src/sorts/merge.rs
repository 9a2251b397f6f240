use std::collections::BTreeSet;

use crate::generator::FrameEmitter;
use crate::renderers::RenderError;

/// Top-down merge sort. Each element written back during a merge gets its
/// own frame. Only the final merge over the whole sequence marks slots as
/// `done`.
pub(crate) fn sort(values: &mut [f64], out: &mut FrameEmitter<'_>) -> Result<(), RenderError> {
    let len = values.len();
    let mut done = BTreeSet::new();
    sort_range(values, 0, len, &mut done, out)?;
    out.emit(out.frame(values).with_done(&done))
}

fn sort_range(
    values: &mut [f64],
    start: usize,
    end: usize,
    done: &mut BTreeSet<usize>,
    out: &mut FrameEmitter<'_>,
) -> Result<(), RenderError> {
    if end - start <= 1 {
        return Ok(());
    }
    let mid = start + (end - start) / 2;
    sort_range(values, start, mid, done, out)?;
    sort_range(values, mid, end, done, out)?;

    let left = values[start..mid].to_vec();
    let right = values[mid..end].to_vec();
    let whole = start == 0 && end == values.len();
    let (mut l, mut r) = (0, 0);
    for k in start..end {
        // Ties take from the left half.
        let take_left = r == right.len() || (l < left.len() && left[l] <= right[r]);
        if take_left {
            values[k] = left[l];
            l += 1;
        } else {
            values[k] = right[r];
            r += 1;
        }
        if whole {
            done.insert(k);
        }
        out.emit(out.frame(values).with_highlight([k]).with_done_except(done, k))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::algorithm::SortAlgorithm;
    use crate::sorts::testing::{animate, set};

    #[test]
    fn two_element_walkthrough() {
        let (sorted, frames) = animate(SortAlgorithm::Merge, &[4.0, 3.0]);
        assert_eq!(sorted, vec![3.0, 4.0]);
        assert_eq!(frames.len(), 4);

        assert_eq!(frames[1].values, vec![3.0, 3.0]);
        assert_eq!(frames[1].highlight, set(&[0]));
        assert!(frames[1].done.is_empty());

        assert_eq!(frames[2].values, vec![3.0, 4.0]);
        assert_eq!(frames[2].highlight, set(&[1]));
        assert_eq!(frames[2].done, set(&[0]));

        assert_eq!(frames[3].done, set(&[0, 1]));
        assert!(frames[3].highlight.is_empty());
    }

    #[test]
    fn only_the_final_merge_marks_done() {
        let input = [5.0, 1.0, 4.0, 2.0, 3.0, 0.0, 6.0];
        let (_, frames) = animate(SortAlgorithm::Merge, &input);
        let n = input.len();
        // Frames before the last n + 1 belong to inner merges.
        let inner = &frames[..frames.len() - n - 1];
        assert!(inner.iter().all(|f| f.done.is_empty()));
        let whole = &frames[frames.len() - n - 1..frames.len() - 1];
        for (k, frame) in whole.iter().enumerate() {
            assert_eq!(frame.highlight, set(&[k]));
            let expected: Vec<usize> = (0..k).collect();
            assert_eq!(frame.done, set(&expected));
        }
    }

    #[test]
    fn one_frame_per_written_element() {
        // 8 elements, 3 levels of merging, 8 writes per level.
        let input: Vec<f64> = (0..8).rev().map(f64::from).collect();
        let (_, frames) = animate(SortAlgorithm::Merge, &input);
        assert_eq!(frames.len(), 1 + 8 * 3 + 1);
    }

    #[test]
    fn ties_take_left_first() {
        let (sorted, frames) = animate(SortAlgorithm::Merge, &[2.0, 1.0, 2.0]);
        assert_eq!(sorted, vec![1.0, 2.0, 2.0]);
        assert_eq!(frames.last().unwrap().done, set(&[0, 1, 2]));
    }

    #[test]
    fn single_value_has_no_done_slots() {
        let (sorted, frames) = animate(SortAlgorithm::Merge, &[7.0]);
        assert_eq!(sorted, vec![7.0]);
        assert_eq!(frames.len(), 2);
        assert!(frames[1].done.is_empty());
    }
}
