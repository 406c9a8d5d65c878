/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`JourneyCommand`](crate::JourneyCommand) values.
/// The embedding shell (browser, winit window, test harness) is
/// responsible for translating its native events into these.
///
/// `over_overlay` reports whether the event targeted the quiz overlay
/// UI. It is carried on presses and scrolls, the two places the
/// original interaction model consults it: a drag that started on the
/// scene keeps panning even when the cursor passes over the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Whether the event targeted the quiz overlay.
        over_overlay: bool,
    },
    /// Scroll wheel with a vertical delta.
    Scroll {
        /// Scroll amount (positive = wheel away from the user).
        delta: f32,
        /// Whether the event targeted the quiz overlay.
        over_overlay: bool,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button — pans the camera, selects level nodes.
    Primary,
    /// Tertiary (middle/wheel) button — dollies the camera.
    Tertiary,
    /// Secondary (right) button — rotates the camera.
    Secondary,
}
