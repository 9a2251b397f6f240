//! The animated algorithms. Each one mutates the sequence in place and
//! emits frames through a [`FrameEmitter`](crate::generator::FrameEmitter);
//! the initial frame is emitted by the generator before dispatch.

pub(crate) mod bubble;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod selection;
