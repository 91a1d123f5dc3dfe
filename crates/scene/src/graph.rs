//! The node store: spawning, parenting, world matrices, and the instance
//! export consumed by an external renderer.

use engine_core::{Transform, TransformRaw};
use glam::{Mat4, Vec3};
use hecs::{Entity, World};
use thiserror::Error;

use crate::{Camera, Lighting, Material};

/// Mesh identity. Geometry lives with the hosting renderer; the graph only
/// carries ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Link from a node to the mesh it renders and the material variant it
/// currently uses.
#[derive(Debug, Clone, Copy)]
pub struct MeshInstance {
    pub mesh: MeshId,
    pub material: Material,
}

/// Parent link; the node's transform becomes parent-relative.
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub Entity);

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("parent node is no longer alive")]
    DeadParent,
    #[error("node is no longer alive")]
    DeadNode,
}

/// One world-matrix entry for the external renderer.
#[derive(Debug, Clone, Copy)]
pub struct InstanceData {
    pub mesh: MeshId,
    pub model: TransformRaw,
}

/// The vignette's scene: node store, camera, backdrop, and lighting rig.
pub struct Scene {
    world: World,
    pub camera: Camera,
    /// Clear color behind everything, swapped by the day/night mode.
    pub background: Vec3,
    pub lighting: Lighting,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            world: World::new(),
            camera,
            background: Vec3::ZERO,
            lighting: Lighting::day(),
        }
    }

    /// Spawn a bare node (no mesh attached).
    pub fn spawn_node(&mut self, transform: Transform) -> Entity {
        self.world.spawn((transform,))
    }

    /// Spawn a node that renders a mesh.
    pub fn spawn_mesh(&mut self, transform: Transform, mesh: MeshInstance) -> Entity {
        self.world.spawn((transform, mesh))
    }

    /// Re-parent `child` under `parent`; its transform becomes relative.
    pub fn set_parent(&mut self, child: Entity, parent: Entity) -> Result<(), SceneError> {
        if !self.world.contains(parent) {
            return Err(SceneError::DeadParent);
        }
        self.world
            .insert_one(child, Parent(parent))
            .map_err(|_| SceneError::DeadNode)
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.world.despawn(entity).ok();
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Mutable access to a node's local transform. Missing nodes yield
    /// `None`; per-tick callers treat that as a skipped update.
    pub fn transform_mut(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, Transform>> {
        self.world.get::<&mut Transform>(entity).ok()
    }

    /// Copy of a node's local transform.
    pub fn transform(&self, entity: Entity) -> Option<Transform> {
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    /// Swap the material variant on a mesh node. Nodes without a mesh are
    /// left alone.
    pub fn set_material(&mut self, entity: Entity, material: Material) {
        if let Ok(mut instance) = self.world.get::<&mut MeshInstance>(entity) {
            instance.material = material;
        }
    }

    pub fn material(&self, entity: Entity) -> Option<Material> {
        self.world
            .get::<&MeshInstance>(entity)
            .ok()
            .map(|m| m.material)
    }

    /// World matrix composed through the parent chain.
    pub fn world_matrix(&self, entity: Entity) -> Option<Mat4> {
        let local = self.world.get::<&Transform>(entity).ok()?.to_matrix();
        match self.world.get::<&Parent>(entity) {
            Ok(parent) => {
                let parent_matrix = self.world_matrix(parent.0)?;
                Some(parent_matrix * local)
            }
            Err(_) => Some(local),
        }
    }

    /// World-space position of a node.
    pub fn world_position(&self, entity: Entity) -> Option<Vec3> {
        self.world_matrix(entity).map(|m| m.w_axis.truncate())
    }

    /// Flatten every mesh node into (mesh id, world matrix) for the
    /// renderer hosting this graph.
    pub fn collect_instances(&self) -> Vec<InstanceData> {
        let mut instances = Vec::new();
        for (entity, (_, mesh)) in self.world.query::<(&Transform, &MeshInstance)>().iter() {
            if let Some(matrix) = self.world_matrix(entity) {
                instances.push(InstanceData {
                    mesh: mesh.mesh,
                    model: TransformRaw::from(matrix),
                });
            }
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn empty_scene() -> Scene {
        Scene::new(Camera::default())
    }

    /// A child's world position composes its offset with the parent's.
    #[test]
    fn world_position_composes_parent_chain() {
        let mut scene = empty_scene();
        let parent = scene.spawn_node(Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
        let child = scene.spawn_node(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
        scene.set_parent(child, parent).unwrap();

        let pos = scene.world_position(child).unwrap();
        assert!((pos - Vec3::new(1.0, 3.0, 3.0)).length() < 1e-6);
    }

    /// Parent rotation carries children around with it.
    #[test]
    fn world_position_rotates_with_parent() {
        let mut scene = empty_scene();
        let parent = scene.spawn_node(Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        ));
        let child = scene.spawn_node(Transform::from_position(Vec3::new(0.0, 0.0, -1.0)));
        scene.set_parent(child, parent).unwrap();

        let pos = scene.world_position(child).unwrap();
        assert!((pos - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    /// Lookups against despawned nodes are `None`, never a panic.
    #[test]
    fn despawned_nodes_yield_none() {
        let mut scene = empty_scene();
        let node = scene.spawn_node(Transform::default());
        scene.despawn(node);

        assert!(!scene.contains(node));
        assert!(scene.transform_mut(node).is_none());
        assert!(scene.world_position(node).is_none());
    }

    #[test]
    fn parenting_to_a_dead_node_fails() {
        let mut scene = empty_scene();
        let parent = scene.spawn_node(Transform::default());
        let child = scene.spawn_node(Transform::default());
        scene.despawn(parent);

        assert!(matches!(
            scene.set_parent(child, parent),
            Err(SceneError::DeadParent)
        ));
    }

    #[test]
    fn instances_cover_only_mesh_nodes() {
        let mut scene = empty_scene();
        scene.spawn_node(Transform::default());
        scene.spawn_mesh(
            Transform::from_position(Vec3::new(0.0, 4.0, 0.0)),
            MeshInstance {
                mesh: MeshId(7),
                material: Material::unlit(),
            },
        );

        let instances = scene.collect_instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].mesh, MeshId(7));
        assert_eq!(instances[0].model.model[3][1], 4.0);
    }

    #[test]
    fn material_swap_reaches_the_mesh() {
        let mut scene = empty_scene();
        let node = scene.spawn_mesh(
            Transform::default(),
            MeshInstance {
                mesh: MeshId(0),
                material: Material::standard(Vec3::ONE),
            },
        );

        scene.set_material(node, Material::unlit());
        assert!(!scene.material(node).unwrap().is_lit());
    }
}
