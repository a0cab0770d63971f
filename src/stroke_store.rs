use crate::error::{HistoryError, HistoryStack};
use crate::stroke::StrokeRef;

/// The visible strokes plus the strokes removed by undo.
///
/// `current` is ordered bottom to top (render order). `redo` is a LIFO stack.
/// A stroke lives in at most one of the two at a time. Pushing a new stroke
/// does not clear `redo`, and `clear` empties `current` only, so strokes
/// undone before a clear can still be redone.
#[derive(Debug, Default, Clone)]
pub struct StrokeStore {
    current: Vec<StrokeRef>,
    redo: Vec<StrokeRef>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke on top of `current`. `redo` is left alone.
    pub fn push(&mut self, stroke: StrokeRef) {
        self.current.push(stroke);
    }

    /// Move the top of `current` onto `redo`.
    pub fn undo(&mut self) -> Result<StrokeRef, HistoryError> {
        let stroke = self
            .current
            .pop()
            .ok_or(HistoryError::EmptyHistory(HistoryStack::Current))?;
        self.redo.push(stroke.clone());
        Ok(stroke)
    }

    /// Move the top of `redo` back onto `current`.
    pub fn redo(&mut self) -> Result<StrokeRef, HistoryError> {
        let stroke = self
            .redo
            .pop()
            .ok_or(HistoryError::EmptyHistory(HistoryStack::Redo))?;
        self.current.push(stroke.clone());
        Ok(stroke)
    }

    /// Empty `current`. `redo` keeps its contents.
    pub fn clear(&mut self) {
        self.current.clear();
    }

    pub fn current(&self) -> &[StrokeRef] {
        &self.current
    }

    pub fn redo_stack(&self) -> &[StrokeRef] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.current.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Take `current` out for an in-place rewrite (used by the eraser).
    pub(crate) fn take_current(&mut self) -> Vec<StrokeRef> {
        std::mem::take(&mut self.current)
    }

    pub(crate) fn set_current(&mut self, strokes: Vec<StrokeRef>) {
        self.current = strokes;
    }
}
