//! Translation from windowing-system events to `InputEvent`s.

mod winit;

pub(crate) use self::winit::translate_window_event;
