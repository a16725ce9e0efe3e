use bouncer_engine::coords::{Ortho2D, Vec2};
use bouncer_engine::scene::DrawList;

use crate::config::SceneStyle;
use crate::sim::SimulationState;

/// Records one frame of the simulation into `list`, replacing its contents.
///
/// Everything is drawn in pixel space (origin bottom-left, +Y up) sized to the
/// current resolution. The label gets its own screen-space projection so it
/// stays put whatever the body's projection becomes.
pub fn record(state: &SimulationState, style: &SceneStyle, list: &mut DrawList) {
    list.clear();
    list.set_clear_color(style.clear);

    let world = Ortho2D::pixels(state.width, state.height);
    list.with_projection(world, |list| {
        list.push_solid_rect(state.body_rect(), style.body);

        let Some(font) = style.font else { return };
        let screen = Ortho2D::pixels(state.width, state.height);
        list.with_projection(screen, |list| {
            list.push_text(style.label, font, style.font_size, style.text, label_baseline(state, style));
        });
    });
}

/// Label baseline in pixel space; the style measures `y` from the top edge.
fn label_baseline(state: &SimulationState, style: &SceneStyle) -> Vec2 {
    Vec2::new(style.label_origin.x, state.height as f32 - style.label_origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_engine::coords::Rect;
    use bouncer_engine::paint::Color;
    use bouncer_engine::scene::DrawCmd;
    use bouncer_engine::text::FontId;

    fn styled() -> SceneStyle {
        SceneStyle { font: Some(FontId(0)), ..SceneStyle::default() }
    }

    #[test]
    fn body_is_red_square_in_pixel_space() {
        let state = SimulationState::default();
        let mut list = DrawList::new();
        record(&state, &styled(), &mut list);

        assert_eq!(list.clear_color(), Color::rgb(0.1, 0.1, 0.1));
        let body = &list.items()[0];
        let DrawCmd::Rect(cmd) = &body.cmd else { panic!("expected a rect, got {:?}", body.cmd) };
        assert_eq!(cmd.rect, Rect::new(0.0, 80.0, 40.0, 40.0));
        assert_eq!(cmd.color, Color::rgb_u8(255, 0, 0));
        assert_eq!(body.projection, Ortho2D::pixels(400, 200));
    }

    #[test]
    fn label_sits_near_top_left() {
        let state = SimulationState::default();
        let mut list = DrawList::new();
        record(&state, &styled(), &mut list);

        assert_eq!(list.items().len(), 2);
        let label = &list.items()[1];
        let DrawCmd::Text(cmd) = &label.cmd else { panic!("expected text, got {:?}", label.cmd) };
        assert_eq!(cmd.text, "F: Speed up, S: Slow down, Esc: Exit");
        assert_eq!(cmd.baseline_origin, Vec2::new(10.0, 180.0));
        assert_eq!(cmd.size, 15.0);
        assert_eq!(cmd.color, Color::WHITE);
        assert_eq!(label.projection, Ortho2D::pixels(400, 200));
    }

    #[test]
    fn label_follows_resize() {
        let mut state = SimulationState::default();
        state.resize(800, 600);
        let mut list = DrawList::new();
        record(&state, &styled(), &mut list);

        let DrawCmd::Text(cmd) = &list.items()[1].cmd else { panic!("expected text") };
        assert_eq!(cmd.baseline_origin, Vec2::new(10.0, 580.0));
        assert_eq!(list.items()[0].projection, Ortho2D::pixels(800, 600));
    }

    #[test]
    fn projection_stack_is_balanced() {
        let mut list = DrawList::new();
        record(&SimulationState::default(), &styled(), &mut list);
        assert_eq!(list.projection_depth(), 0);

        record(&SimulationState::default(), &SceneStyle::default(), &mut list);
        assert_eq!(list.projection_depth(), 0);
    }

    #[test]
    fn no_font_means_no_label() {
        let mut list = DrawList::new();
        record(&SimulationState::default(), &SceneStyle::default(), &mut list);
        assert_eq!(list.items().len(), 1);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Rect(_)));
    }

    #[test]
    fn recording_replaces_previous_frame() {
        let mut state = SimulationState::default();
        let mut list = DrawList::new();
        record(&state, &styled(), &mut list);
        state.position = Vec2::new(100.0, 100.0);
        record(&state, &styled(), &mut list);

        assert_eq!(list.items().len(), 2);
        let DrawCmd::Rect(cmd) = &list.items()[0].cmd else { panic!("expected a rect") };
        assert_eq!(cmd.rect.center(), Vec2::new(100.0, 100.0));
    }
}
