//! Converts raw pointer events into engine commands.
//!
//! The `InputProcessor` owns all transient pointer state (held buttons,
//! last cursor position, drag detection, the node under the cursor at
//! press time). It is the only thing that sits between raw shell events
//! and the engine's [`execute`](crate::JourneyEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use crate::engine::command::JourneyCommand;

/// Squared pixel distance that turns a press into a drag, suppressing
/// node selection on release.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Converts raw pointer events into [`JourneyCommand`]s.
///
/// Several buttons may be held at once; a single cursor move then
/// yields one command per held button (pan, then dolly, then rotate),
/// matching the chord-drag behavior of the interaction model.
///
/// # Usage
///
/// ```ignore
/// // In the event loop, `hovered` from the external raycaster:
/// for cmd in processor.handle_event(event, hovered) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    last_pos: Vec2,
    primary_down: bool,
    secondary_down: bool,
    tertiary_down: bool,
    dragging: bool,
    /// Level node under the cursor at primary press time.
    press_target: Option<u32>,
}

impl InputProcessor {
    /// Create a processor with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_pos: Vec2::ZERO,
            primary_down: false,
            secondary_down: false,
            tertiary_down: false,
            dragging: false,
            press_target: None,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor_pos(&self) -> Vec2 {
        self.last_pos
    }

    /// Whether any pointer button is currently held.
    #[must_use]
    pub fn any_button_down(&self) -> bool {
        self.primary_down || self.secondary_down || self.tertiary_down
    }

    /// Process one raw event and return the resulting commands.
    ///
    /// `hovered` is the level node currently under the cursor, supplied
    /// by the external raycaster (or `None` over empty scene/overlay).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<u32>,
    ) -> Vec<JourneyCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::PointerButton {
                button,
                pressed,
                over_overlay,
            } => self.handle_button(button, pressed, over_overlay, hovered),
            InputEvent::Scroll {
                delta,
                over_overlay,
            } => {
                if over_overlay {
                    Vec::new()
                } else {
                    vec![JourneyCommand::Zoom { delta }]
                }
            }
        }
    }

    fn handle_cursor_moved(&mut self, pos: Vec2) -> Vec<JourneyCommand> {
        let delta = pos - self.last_pos;
        self.last_pos = pos;

        if !self.any_button_down() {
            return Vec::new();
        }
        if delta.length_squared() > DRAG_THRESHOLD_SQ {
            self.dragging = true;
        }

        let mut commands = Vec::new();
        if self.primary_down {
            commands.push(JourneyCommand::PanCamera { delta });
        }
        if self.tertiary_down {
            commands.push(JourneyCommand::ZoomCamera { delta: delta.y });
        }
        if self.secondary_down {
            commands.push(JourneyCommand::RotateCamera { delta });
        }
        commands
    }

    fn handle_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
        over_overlay: bool,
        hovered: Option<u32>,
    ) -> Vec<JourneyCommand> {
        if pressed {
            // Presses that land on the overlay never reach the scene.
            if over_overlay {
                return Vec::new();
            }
            match button {
                PointerButton::Primary => {
                    self.primary_down = true;
                    self.press_target = hovered;
                    self.dragging = false;
                }
                PointerButton::Secondary => self.secondary_down = true,
                PointerButton::Tertiary => self.tertiary_down = true,
            }
            return Vec::new();
        }

        // Releases are always processed so buttons cannot stick down.
        match button {
            PointerButton::Primary => {
                self.primary_down = false;
                let target = self.press_target.take();
                let was_dragging = self.dragging;
                self.dragging = false;
                if !was_dragging {
                    if let (Some(down), Some(up)) = (target, hovered) {
                        if down == up {
                            return vec![JourneyCommand::SelectLevel {
                                id: down,
                            }];
                        }
                    }
                }
                Vec::new()
            }
            PointerButton::Secondary => {
                self.secondary_down = false;
                Vec::new()
            }
            PointerButton::Tertiary => {
                self.tertiary_down = false;
                Vec::new()
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: PointerButton) -> InputEvent {
        InputEvent::PointerButton {
            button,
            pressed: true,
            over_overlay: false,
        }
    }

    fn release(button: PointerButton) -> InputEvent {
        InputEvent::PointerButton {
            button,
            pressed: false,
            over_overlay: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn primary_drag_pans() {
        let mut p = InputProcessor::new();
        assert!(p.handle_event(moved(100.0, 100.0), None).is_empty());
        assert!(p.handle_event(press(PointerButton::Primary), None).is_empty());
        let cmds = p.handle_event(moved(110.0, 95.0), None);
        assert_eq!(
            cmds,
            vec![JourneyCommand::PanCamera {
                delta: Vec2::new(10.0, -5.0)
            }]
        );
    }

    #[test]
    fn chord_drag_emits_one_command_per_button() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(moved(0.0, 0.0), None);
        let _ = p.handle_event(press(PointerButton::Primary), None);
        let _ = p.handle_event(press(PointerButton::Secondary), None);
        let _ = p.handle_event(press(PointerButton::Tertiary), None);
        let cmds = p.handle_event(moved(4.0, 6.0), None);
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], JourneyCommand::PanCamera { .. }));
        assert!(matches!(cmds[1], JourneyCommand::ZoomCamera { .. }));
        assert!(matches!(cmds[2], JourneyCommand::RotateCamera { .. }));
    }

    #[test]
    fn motion_without_buttons_is_silent() {
        let mut p = InputProcessor::new();
        assert!(p.handle_event(moved(50.0, 50.0), None).is_empty());
        assert!(p.handle_event(moved(80.0, 20.0), None).is_empty());
    }

    #[test]
    fn click_on_node_selects_it() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(moved(10.0, 10.0), Some(2));
        let _ = p.handle_event(press(PointerButton::Primary), Some(2));
        let cmds = p.handle_event(release(PointerButton::Primary), Some(2));
        assert_eq!(cmds, vec![JourneyCommand::SelectLevel { id: 2 }]);
    }

    #[test]
    fn drag_suppresses_selection() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(moved(10.0, 10.0), Some(2));
        let _ = p.handle_event(press(PointerButton::Primary), Some(2));
        let _ = p.handle_event(moved(40.0, 10.0), Some(2));
        let cmds = p.handle_event(release(PointerButton::Primary), Some(2));
        assert!(cmds.is_empty());
    }

    #[test]
    fn press_and_release_on_different_nodes_is_no_selection() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(press(PointerButton::Primary), Some(1));
        let cmds = p.handle_event(release(PointerButton::Primary), Some(3));
        assert!(cmds.is_empty());
    }

    #[test]
    fn overlay_press_is_ignored_but_release_still_clears() {
        let mut p = InputProcessor::new();
        let over = InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: true,
            over_overlay: true,
        };
        assert!(p.handle_event(over, Some(1)).is_empty());
        // Button was never tracked, so motion produces nothing.
        assert!(p.handle_event(moved(5.0, 5.0), None).is_empty());
        assert!(p
            .handle_event(release(PointerButton::Primary), Some(1))
            .is_empty());
    }

    #[test]
    fn overlay_scroll_is_ignored() {
        let mut p = InputProcessor::new();
        let cmds = p.handle_event(
            InputEvent::Scroll {
                delta: 3.0,
                over_overlay: true,
            },
            None,
        );
        assert!(cmds.is_empty());
        let cmds = p.handle_event(
            InputEvent::Scroll {
                delta: 3.0,
                over_overlay: false,
            },
            None,
        );
        assert_eq!(cmds, vec![JourneyCommand::Zoom { delta: 3.0 }]);
    }
}
