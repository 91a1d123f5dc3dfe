//! Scene construction: terrain plane and the three-part helicopter.

use engine_core::Transform;
use glam::{Quat, Vec3};
use scene::{rgb, Material, MeshId, MeshInstance, Scene, SceneError};
use std::f32::consts::FRAC_PI_2;

use crate::panel::PanelSnapshot;
use crate::state::HelicopterRig;

/// Mesh ids the hosting renderer resolves to real geometry.
pub const GROUND_PLANE_MESH: MeshId = MeshId(0);
pub const HELI_BODY_MESH: MeshId = MeshId(1);
pub const MAIN_ROTOR_MESH: MeshId = MeshId(2);
pub const TAIL_ROTOR_MESH: MeshId = MeshId(3);

/// Ground plane span in world units.
const PLANE_SIZE: f32 = 100.0;

/// Rotor mount points in body-local space.
const MAIN_ROTOR_OFFSET: Vec3 = Vec3::new(0.0, 2.97, -0.69);
const TAIL_ROTOR_OFFSET: Vec3 = Vec3::new(0.06, 1.81, -8.01);

/// Build the vignette scene and return the helicopter handles.
///
/// The body's full placement comes from the panel snapshot; the X value
/// only holds until the flight loop arms and takes over the horizontal
/// axis. The body is yawed a quarter turn so the nose leads the flight
/// direction.
pub fn build(scene: &mut Scene, params: &PanelSnapshot) -> Result<HelicopterRig, SceneError> {
    let grass = Material::standard(rgb(0x85, 0xE7, 0x49));
    scene.spawn_mesh(
        Transform {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            scale: Vec3::new(PLANE_SIZE, PLANE_SIZE, 1.0),
        },
        MeshInstance {
            mesh: GROUND_PLANE_MESH,
            material: grass,
        },
    );

    let hull = crate::mode::Mode::default().material();
    let body = scene.spawn_mesh(
        Transform::from_position_rotation(params.helicopter, Quat::from_rotation_y(FRAC_PI_2)),
        MeshInstance {
            mesh: HELI_BODY_MESH,
            material: hull,
        },
    );
    let main_rotor = scene.spawn_mesh(
        Transform::from_position(MAIN_ROTOR_OFFSET),
        MeshInstance {
            mesh: MAIN_ROTOR_MESH,
            material: hull,
        },
    );
    let tail_rotor = scene.spawn_mesh(
        Transform::from_position(TAIL_ROTOR_OFFSET),
        MeshInstance {
            mesh: TAIL_ROTOR_MESH,
            material: hull,
        },
    );
    scene.set_parent(main_rotor, body)?;
    scene.set_parent(tail_rotor, body)?;

    Ok(HelicopterRig {
        body: Some(body),
        main_rotor: Some(main_rotor),
        tail_rotor: Some(tail_rotor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::DebugPanel;
    use scene::Camera;

    #[test]
    fn build_mounts_four_meshes() {
        let mut scene = Scene::new(Camera::default());
        let panel = DebugPanel::new(1280.0);
        let rig = build(&mut scene, &panel.snapshot()).unwrap();

        assert_eq!(scene.collect_instances().len(), 4);
        assert!(rig.body.is_some());
        assert!(rig.main_rotor.is_some());
        assert!(rig.tail_rotor.is_some());
    }

    /// Rotors ride the body: moving the body carries both mount points.
    #[test]
    fn rotors_are_parented_to_the_body() {
        let mut scene = Scene::new(Camera::default());
        let panel = DebugPanel::new(1280.0);
        let rig = build(&mut scene, &panel.snapshot()).unwrap();

        let body = rig.body.unwrap();
        {
            let mut t = scene.transform_mut(body).unwrap();
            t.position = Vec3::new(10.0, 20.0, 30.0);
            t.rotation = Quat::IDENTITY;
        }
        let main_pos = scene.world_position(rig.main_rotor.unwrap()).unwrap();
        assert!((main_pos - (Vec3::new(10.0, 20.0, 30.0) + MAIN_ROTOR_OFFSET)).length() < 1e-5);
    }

    /// The body starts where the panel places it, yawed into the flight
    /// direction.
    #[test]
    fn body_spawns_at_the_panel_placement() {
        let mut scene = Scene::new(Camera::default());
        let panel = DebugPanel::new(1280.0);
        let rig = build(&mut scene, &panel.snapshot()).unwrap();

        let body = scene.transform(rig.body.unwrap()).unwrap();
        assert_eq!(body.position, Vec3::new(-40.0, 16.3, -14.9));
        let expected = Quat::from_rotation_y(FRAC_PI_2);
        assert!(body.rotation.dot(expected).abs() > 1.0 - 1e-6);
    }
}
