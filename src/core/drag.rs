//! Drag-to-move tracking for the borderless window
//!
//! Positions are window-relative pointer coordinates. The controller only
//! reports how far the window should move; applying the move to the
//! platform window is the shell's job.

/// Pointer position captured on press
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAnchor {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct DragController {
    anchor: DragAnchor,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary button went down at `(x, y)`
    pub fn press(&mut self, x: f32, y: f32) {
        self.anchor = DragAnchor { x, y, active: true };
    }

    /// Primary button released
    pub fn release(&mut self) {
        self.anchor.active = false;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.anchor.active
    }

    #[cfg(test)]
    pub fn anchor(&self) -> DragAnchor {
        self.anchor
    }

    /// Pointer moved to `(x, y)`. Returns the translation that keeps the
    /// pointer at the same offset inside the window, or `None` when no
    /// drag is in progress.
    pub fn motion(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.anchor.active {
            return None;
        }
        Some((x - self.anchor.x, y - self.anchor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_move_translates_window() {
        let mut drag = DragController::new();
        drag.press(10.0, 10.0);
        assert_eq!(drag.motion(15.0, 18.0), Some((5.0, 8.0)));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let drag = DragController::new();
        assert!(!drag.is_active());
        assert_eq!(drag.motion(15.0, 18.0), None);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut drag = DragController::new();
        drag.press(10.0, 10.0);
        drag.release();
        assert_eq!(drag.motion(40.0, 40.0), None);
    }

    #[test]
    fn test_negative_translation_is_not_clamped() {
        let mut drag = DragController::new();
        drag.press(50.0, 60.0);
        assert_eq!(drag.motion(-20.0, 0.0), Some((-70.0, -60.0)));
    }

    #[test]
    fn test_new_press_replaces_anchor() {
        let mut drag = DragController::new();
        drag.press(10.0, 10.0);
        drag.release();
        drag.press(3.0, 4.0);
        assert_eq!(
            drag.anchor(),
            DragAnchor {
                x: 3.0,
                y: 4.0,
                active: true
            }
        );
        assert_eq!(drag.motion(3.0, 4.0), Some((0.0, 0.0)));
    }
}
