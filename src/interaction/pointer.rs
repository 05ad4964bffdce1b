use bevy::prelude::*;

/// Convert a window cursor position (logical pixels, top-left origin) to
/// world coordinates.
fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?; // single camera assumption
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Unified pointer (mouse or first touch) world position.
pub fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        // Touch positions share the cursor's logical coordinate space.
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

/// True on the frame the primary pointer (mouse button or touch) lifted.
pub fn pointer_released(buttons: &ButtonInput<MouseButton>, touches: &Touches) -> bool {
    buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some()
}
