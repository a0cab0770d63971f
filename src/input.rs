use egui::{Context, Pos2, Rect};

use crate::geometry::Point;
use crate::stroke::StrokeBuilder;

/// Pointer events in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button went down on the canvas
    Press(Point),
    /// Pointer moved while the button is held
    Drag(Point),
    /// Button released
    Release(Point),
}

impl InputEvent {
    pub fn position(&self) -> Point {
        match self {
            InputEvent::Press(p) | InputEvent::Drag(p) | InputEvent::Release(p) => *p,
        }
    }
}

/// The press/drag/release state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        path: StrokeBuilder,
    },
}

impl DragState {
    /// Advance the state machine.
    ///
    /// Returns the finished path when a drag ends. The release position is
    /// not part of the path; it is always the last drag position anyway.
    pub fn handle(&mut self, event: InputEvent) -> Option<Vec<Point>> {
        match (std::mem::take(self), event) {
            (DragState::Idle, InputEvent::Press(p)) => {
                *self = DragState::Dragging {
                    path: StrokeBuilder::new(p),
                };
                None
            }
            (DragState::Dragging { path }, InputEvent::Press(p)) => {
                log::warn!(
                    "Press while dragging, dropping {} unreleased point(s)",
                    path.points().len()
                );
                *self = DragState::Dragging {
                    path: StrokeBuilder::new(p),
                };
                None
            }
            (DragState::Dragging { mut path }, InputEvent::Drag(p)) => {
                path.add_point(p);
                *self = DragState::Dragging { path };
                None
            }
            (DragState::Dragging { path }, InputEvent::Release(_)) => Some(path.into_points()),
            (DragState::Idle, event) => {
                log::debug!("Ignoring {:?} outside of a drag", event);
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn in_progress(&self) -> Option<&[Point]> {
        match self {
            Self::Dragging { path } => Some(path.points()),
            Self::Idle => None,
        }
    }
}

/// Handles converting raw egui pointer input into [`InputEvent`]s
pub struct InputHandler {
    canvas_rect: Rect,
    tracking: bool,
    last_position: Option<Point>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            tracking: false,
            last_position: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// True between a press on the canvas and the matching release
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Screen position to canvas-local pixel
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::from_pos2(pos - self.canvas_rect.min.to_vec2())
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let position = pointer.interact_pos();

            if pointer.primary_pressed() {
                if let Some(pos) = position.filter(|pos| self.canvas_rect.contains(*pos)) {
                    let point = self.to_canvas(pos);
                    events.push(InputEvent::Press(point));
                    self.tracking = true;
                    self.last_position = Some(point);
                }
            } else if self.tracking && pointer.primary_down() {
                if let Some(pos) = position {
                    let point = self.to_canvas(pos);
                    if self.last_position != Some(point) {
                        events.push(InputEvent::Drag(point));
                        self.last_position = Some(point);
                    }
                }
            }

            if self.tracking && pointer.primary_released() {
                let point = position
                    .map(|pos| self.to_canvas(pos))
                    .or(self.last_position)
                    .unwrap_or_default();
                events.push(InputEvent::Release(point));
                self.tracking = false;
                self.last_position = None;
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_drag_release() {
        let mut state = DragState::default();
        assert_eq!(state.handle(InputEvent::Press(Point::new(1, 1))), None);
        assert_eq!(state.handle(InputEvent::Drag(Point::new(2, 2))), None);
        assert_eq!(state.in_progress(), Some(&[Point::new(1, 1), Point::new(2, 2)][..]));

        let path = state.handle(InputEvent::Release(Point::new(3, 3)));
        assert_eq!(path, Some(vec![Point::new(1, 1), Point::new(2, 2)]));
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_events_outside_a_drag_are_ignored() {
        let mut state = DragState::Idle;
        assert_eq!(state.handle(InputEvent::Drag(Point::new(5, 5))), None);
        assert_eq!(state.handle(InputEvent::Release(Point::new(5, 5))), None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_second_press_restarts_the_path() {
        let mut state = DragState::Idle;
        state.handle(InputEvent::Press(Point::new(1, 1)));
        state.handle(InputEvent::Drag(Point::new(2, 2)));
        state.handle(InputEvent::Press(Point::new(9, 9)));
        assert_eq!(state.in_progress(), Some(&[Point::new(9, 9)][..]));
    }

    #[test]
    fn test_to_canvas_is_panel_relative() {
        let handler = InputHandler::new(Rect::from_min_size(egui::pos2(200.0, 10.0), egui::vec2(800.0, 750.0)));
        assert_eq!(handler.to_canvas(egui::pos2(250.4, 60.6)), Point::new(50, 51));
    }
}
