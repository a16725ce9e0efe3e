use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{Key as LogicalKey, KeyCode, NamedKey, PhysicalKey};

use crate::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Maps a winit window event onto the engine's event model.
///
/// Events the demo has no use for (focus, IME, wheel, redraw, ...) map to `None`.
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Resized(size) => Some(InputEvent::Resized {
            width: size.width,
            height: size.height,
        }),

        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved(PointerMoveEvent {
            x: position.x as f32,
            y: position.y as f32,
        })),

        WindowEvent::MouseInput { state, button, .. } => {
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: match state {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let (physical, code) = map_key(event.physical_key);
            // Bindings follow the active layout; positions only for non-Latin layouts.
            let key = map_logical_key(&event.logical_key).unwrap_or(physical);
            Some(InputEvent::Key {
                key,
                state: match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                },
                code,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(8),
        WinitMouseButton::Forward => MouseButton::Other(9),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

/// Key as produced by the keyboard layout, if it is one the engine names.
fn map_logical_key(key: &LogicalKey) -> Option<Key> {
    match key {
        LogicalKey::Named(NamedKey::Escape) => Some(Key::Escape),
        LogicalKey::Character(text) => {
            let mut chars = text.chars();
            let c = chars.next()?.to_ascii_lowercase();
            if chars.next().is_some() || !c.is_ascii_lowercase() {
                return None;
            }
            Some(LETTERS[(c as u8 - b'a') as usize])
        }
        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => (map_key_code(code), code as u32),
        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_letter_keys_map_by_position() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyS)).0, Key::S);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyF)).0, Key::F);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
    }

    #[test]
    fn layout_letters_win_over_position() {
        // AZERTY: the key in the QWERTY "A" position types "q".
        assert_eq!(map_logical_key(&LogicalKey::Character("q".into())), Some(Key::Q));
        assert_eq!(map_logical_key(&LogicalKey::Character("S".into())), Some(Key::S));
        assert_eq!(map_logical_key(&LogicalKey::Named(NamedKey::Escape)), Some(Key::Escape));
    }

    #[test]
    fn non_latin_symbols_fall_back_to_position() {
        assert_eq!(map_logical_key(&LogicalKey::Character("ы".into())), None);
        assert_eq!(map_logical_key(&LogicalKey::Character("ss".into())), None);
        assert_eq!(map_logical_key(&LogicalKey::Character("1".into())), None);
        assert_eq!(map_logical_key(&LogicalKey::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn unmapped_keys_keep_their_code() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(KeyCode::F5 as u32));
        assert_eq!(code, KeyCode::F5 as u32);
    }

    #[test]
    fn resize_and_close_translate() {
        let resized = WindowEvent::Resized(winit::dpi::PhysicalSize::new(800, 600));
        assert_eq!(
            translate_window_event(&resized),
            Some(InputEvent::Resized { width: 800, height: 600 })
        );
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::CloseRequested)
        );
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
    }
}
