//! Rhea: a support caster with a shield, a dash and the Last Word ultimate.

mod dash;
mod idle;
mod shield;

pub use dash::RheaDashState;
pub use idle::RheaIdleState;
pub use shield::RheaShieldState;

use crate::character::{MOVE_DEADZONE, StateInput};

/// Drive the locomotion cue from horizontal input.
///
/// Plays "Run" when movement starts and "Idle" when it stops.
fn handle_move_animation(prev_horizontal_movement: &mut f32, input: &mut StateInput<'_>) {
    let horizontal = input.movement.x;
    input.anim.horizontal = horizontal;

    let moving = horizontal.abs() > MOVE_DEADZONE;
    let was_moving = prev_horizontal_movement.abs() > MOVE_DEADZONE;

    if moving {
        input.controller.update_facing(horizontal);
    }
    if moving && !was_moving {
        input.anim.play("Run");
    } else if !moving && was_moving {
        input.anim.play("Idle");
    }

    *prev_horizontal_movement = horizontal;
}
