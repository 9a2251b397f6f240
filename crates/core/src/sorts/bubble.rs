use std::collections::BTreeSet;

use crate::generator::FrameEmitter;
use crate::renderers::RenderError;

/// Bubble sort. The compared pair is shown before the comparison; the slot
/// a pass settles joins `done` silently and shows up in the next frame.
pub(crate) fn sort(values: &mut [f64], out: &mut FrameEmitter<'_>) -> Result<(), RenderError> {
    let len = values.len();
    let mut done = BTreeSet::new();
    for i in 0..len {
        for j in 0..len - i - 1 {
            out.emit(out.frame(values).with_highlight([j, j + 1]).with_done(&done))?;
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
        done.insert(len - i - 1);
    }
    out.emit(out.frame(values).with_done(&done))
}
