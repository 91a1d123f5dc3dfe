//! Searchlight tracking: keeps the night rig's beam locked to the
//! helicopter.

use scene::Scene;

use crate::panel::SpotParams;
use crate::state::HelicopterRig;

/// Lock the spotlight and its aim target to the body's world position.
///
/// Runs after the body transform has been updated, so the beam follows
/// within the same tick. The target keeps its own height; only X/Z chase
/// the body, which keeps the beam angled down at the ground. Any missing
/// piece (no body handle, body despawned, day rig active) makes this a
/// silent skip.
pub fn follow_body(scene: &mut Scene, rig: &HelicopterRig, params: &SpotParams) {
    let Some(body) = rig.body else { return };
    let Some(body_pos) = scene.world_position(body) else { return };
    let Some(spot) = scene.lighting.spot_mut() else { return };

    spot.intensity = params.intensity;
    spot.distance = params.distance;
    spot.angle = params.angle;

    // Copy, not alias: the light keeps its own vector.
    spot.position = body_pos;
    spot.target.position.x = body_pos.x;
    spot.target.position.z = body_pos.z;
    // Refresh now so the beam direction is correct this tick, not whenever
    // the target next happens to be recomputed.
    spot.target.refresh_world();
}
