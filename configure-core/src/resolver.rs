//! Turns a winning configuration into the geometry the window gets.
use crate::models::{
    Configuration, ConfigurationPosition, Rect, ResolvedGeometry, Size, SurfaceWindow,
};

/// Resolves the final geometry for `window` once `config` won.
///
/// `committed` is the logical size of the buffer the client committed along with its ack. It
/// replaces the proposed size whenever the client was free to choose, or stayed within the
/// bounds of a resize it was asked for.
pub fn resolve(
    window: &impl SurfaceWindow,
    config: &Configuration,
    committed: Size,
) -> ResolvedGeometry {
    let current = window.current_rect();
    let reference = reference_rect(window, config, current);
    let size = resolve_size(config, committed, reference.size());

    let rect = if size == reference.size() {
        reference
    } else {
        config.gravity().resize_anchored(reference, size)
    };

    ResolvedGeometry {
        x: rect.x,
        y: rect.y,
        width: rect.w,
        height: rect.h,
        scale: config.scale(),
    }
}

/// Where the window would be if the client took the proposal exactly. Relative positions are
/// resolved against the anchor as it is now.
fn reference_rect(window: &impl SurfaceWindow, config: &Configuration, current: Rect) -> Rect {
    let size = config.size().unwrap_or_else(|| current.size());
    match config.position() {
        ConfigurationPosition::Absolute { x, y } => Rect::new(x, y, size.w, size.h),
        ConfigurationPosition::Relative { x, y } => {
            let (anchor_x, anchor_y) = window.anchor();
            Rect::new(anchor_x + x, anchor_y + y, size.w, size.h)
        }
        ConfigurationPosition::Unchanged => current,
    }
}

fn resolve_size(config: &Configuration, committed: Size, fallback: Size) -> Size {
    let Some(proposed) = config.size() else {
        return if committed.is_valid() { committed } else { fallback };
    };
    let consistent =
        committed.is_valid() && (!config.is_resize() || committed.fits_within(proposed));
    if consistent {
        committed
    } else {
        proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gravity, MoveResizeFlags, Surface};

    fn move_resize(window: &Surface, rect: Rect, gravity: Gravity) -> Configuration {
        Configuration::for_move_resize(
            window,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            1,
            MoveResizeFlags::empty(),
            gravity,
        )
    }

    #[test]
    fn bottom_right_gravity_keeps_the_corner() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = move_resize(&window, Rect::new(0, 0, 50, 50), Gravity::SouthEast);
        let resolved = resolve(&window, &config, Size::new(50, 50));
        assert_eq!(resolved.rect(), Rect::new(50, 50, 50, 50));
    }

    #[test]
    fn exact_absolute_proposal_is_taken_as_is() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = move_resize(&window, Rect::new(40, 30, 60, 70), Gravity::SouthEast);
        let resolved = resolve(&window, &config, Size::new(60, 70));
        assert_eq!(resolved.rect(), Rect::new(40, 30, 60, 70));
    }

    #[test]
    fn smaller_client_buffer_is_anchored_inside_the_proposal() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = move_resize(&window, Rect::new(10, 10, 200, 200), Gravity::SouthEast);
        let resolved = resolve(&window, &config, Size::new(150, 180));
        assert_eq!(resolved.rect(), Rect::new(60, 30, 150, 180));
    }

    #[test]
    fn oversized_buffer_falls_back_to_the_proposal() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = move_resize(&window, Rect::new(0, 0, 200, 200), Gravity::NorthWest);
        let resolved = resolve(&window, &config, Size::new(400, 100));
        assert_eq!(resolved.size(), Size::new(200, 200));
    }

    #[test]
    fn client_picks_its_size_when_it_was_not_a_resize() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = move_resize(&window, Rect::new(20, 0, 100, 100), Gravity::NorthWest);
        assert!(!config.is_resize());
        let resolved = resolve(&window, &config, Size::new(120, 90));
        assert_eq!(resolved.rect(), Rect::new(20, 0, 120, 90));
    }

    #[test]
    fn no_size_keeps_current_size_without_a_buffer() {
        let window = Surface::new(Rect::new(5, 5, 100, 100));
        let resolved = resolve(&window, &Configuration::for_empty(), Size::default());
        assert_eq!(resolved.rect(), Rect::new(5, 5, 100, 100));
        assert_eq!(resolved.scale, 1);
    }

    #[test]
    fn relative_position_uses_the_anchor_at_apply_time() {
        let mut window = Surface::new(Rect::new(0, 0, 10, 10)).with_anchor(100, 100);
        let config = Configuration::for_relative(5, 6, 40, 30, 1);
        window.anchor = (300, 200);
        let resolved = resolve(&window, &config, Size::new(40, 30));
        assert_eq!(resolved.rect(), Rect::new(305, 206, 40, 30));
    }

    #[test]
    fn scale_turns_logical_into_device_size() {
        let window = Surface::new(Rect::new(0, 0, 100, 100));
        let config = Configuration::for_relative(0, 0, 100, 50, 2);
        let resolved = resolve(&window, &config, Size::new(100, 50));
        assert_eq!(resolved.device_size(), Size::new(200, 100));
    }
}
