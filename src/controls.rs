use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use chase_drive::{DriveAction, InputState};

/// Keyboard layout for the viewer. WASD and the arrow keys both drive.
pub struct KeyBindings {
    pub accelerate: [Keycode; 2],
    pub reverse: [Keycode; 2],
    pub steer_left: [Keycode; 2],
    pub steer_right: [Keycode; 2],
    pub reset: Keycode,
    pub exit: Keycode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            accelerate: [Keycode::W, Keycode::Up],
            reverse: [Keycode::S, Keycode::Down],
            steer_left: [Keycode::A, Keycode::Left],
            steer_right: [Keycode::D, Keycode::Right],
            reset: Keycode::R,
            exit: Keycode::Escape,
        }
    }
}

impl KeyBindings {
    pub fn action_for(&self, keycode: Keycode) -> Option<DriveAction> {
        if self.accelerate.contains(&keycode) {
            Some(DriveAction::Accelerate)
        } else if self.reverse.contains(&keycode) {
            Some(DriveAction::Reverse)
        } else if self.steer_left.contains(&keycode) {
            Some(DriveAction::SteerLeft)
        } else if self.steer_right.contains(&keycode) {
            Some(DriveAction::SteerRight)
        } else {
            None
        }
    }
}

// Things the viewer itself has to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    None,
    Reset,
    Exit,
}

pub struct KeyboardInput {
    bindings: KeyBindings,
    state: InputState,
}

impl KeyboardInput {
    pub fn new(bindings: KeyBindings) -> Self {
        KeyboardInput {
            bindings,
            state: InputState::new(),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn process_event(&mut self, event: &Event) -> ViewerCommand {
        match event {
            Event::Quit { .. } => ViewerCommand::Exit,
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => {
                if *keycode == self.bindings.exit {
                    return ViewerCommand::Exit;
                }
                if *keycode == self.bindings.reset && !*repeat {
                    return ViewerCommand::Reset;
                }
                if let Some(action) = self.bindings.action_for(*keycode) {
                    self.state.press(action);
                }
                ViewerCommand::None
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(action) = self.bindings.action_for(*keycode) {
                    self.state.release(action);
                }
                ViewerCommand::None
            }
            Event::Window {
                win_event: WindowEvent::FocusLost,
                ..
            } => {
                self.state.clear();
                ViewerCommand::None
            }
            _ => ViewerCommand::None,
        }
    }
}

pub fn print_controls() {
    tracing::info!("W / Up      accelerate");
    tracing::info!("S / Down    brake, then reverse");
    tracing::info!("A / Left    steer left");
    tracing::info!("D / Right   steer right");
    tracing::info!("R           back to the start");
    tracing::info!("Esc         quit and show statistics");
}
