//! The per-tick frame update.
//!
//! Strict order inside one tick: debug camera pose, viewport measurement,
//! rotor spin, flight advance, then light tracking against the body
//! position written this same tick. Nothing here retries or reports
//! failure; a lookup that misses is skipped and attempted again next tick.

use glam::{Quat, Vec3};

use crate::flight::FlightState;
use crate::rotor;
use crate::state::Vignette;
use crate::tracking;

/// World point where the visible flight corridor width is measured.
pub const FLIGHT_DEPTH_PROBE: Vec3 = Vec3::new(0.0, 0.0, -10.0);

/// Run one animation tick. `elapsed` is the clock's total elapsed seconds;
/// the tick index is implicit in the call itself (flight speed is per tick,
/// rotor phase is per second).
pub fn frame(v: &mut Vignette, elapsed: f32) {
    let params = v.panel.snapshot();

    // Debug camera rig.
    v.scene
        .camera
        .set_pose(params.camera.position, params.camera.rotation);

    let (viewport_width, _) = v.scene.camera.visible_size(FLIGHT_DEPTH_PROBE);

    // Rotors spin from wall-clock elapsed time.
    let spin = rotor::angles(elapsed);
    if let Some(entity) = v.rig.main_rotor {
        if let Some(mut t) = v.scene.transform_mut(entity) {
            t.rotation = Quat::from_rotation_y(spin.main);
        }
    }
    if let Some(entity) = v.rig.tail_rotor {
        if let Some(mut t) = v.scene.transform_mut(entity) {
            t.rotation = Quat::from_rotation_x(spin.tail);
        }
    }

    // The first usable measurement arms the flight loop.
    if v.flight.is_none() && viewport_width > 0.0 {
        v.flight = Some(FlightState::new(viewport_width));
    }

    // Flight advance, then the tracker against the just-updated body.
    let Some(body) = v.rig.body else { return };
    if !v.scene.contains(body) {
        return;
    }
    let Some(flight) = v.flight.as_mut() else { return };
    let x = flight.advance(viewport_width);
    if let Some(mut t) = v.scene.transform_mut(body) {
        t.position = Vec3::new(x, params.helicopter.y, params.helicopter.z);
    }
    tracking::follow_body(&mut v.scene, &v.rig, &params.spot);
}
