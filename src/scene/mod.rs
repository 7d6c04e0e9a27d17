//! Demo level: a hecs world of static colliders the kinematic Mover
//! resolves against.

pub mod mover;

use glam::Vec3;
use hecs::{Entity, World};

/// World-space position of a level entity.
pub struct Position(pub Vec3);

/// Static level geometry.
pub enum Collider {
    /// Infinite plane. Points `p` with `p · normal ≥ offset` are outside.
    Plane { normal: Vec3, offset: f32 },
    /// Axis-aligned box, half extents around the entity's `Position`.
    Aabb { half_extents: Vec3 },
}

pub fn spawn_ground(world: &mut World) -> Entity {
    world.spawn((
        Position(Vec3::ZERO),
        Collider::Plane {
            normal: Vec3::Y,
            offset: 0.0,
        },
    ))
}

pub fn spawn_platform(world: &mut World, center: Vec3, half_extents: Vec3) -> Entity {
    world.spawn((Position(center), Collider::Aabb { half_extents }))
}

/// Ground plane plus a few platforms scattered around spawn.
pub fn demo_level() -> World {
    let mut world = World::new();
    spawn_ground(&mut world);
    spawn_platform(
        &mut world,
        Vec3::new(3.0, 0.5, 2.0),
        Vec3::new(1.5, 0.5, 1.5),
    );
    spawn_platform(
        &mut world,
        Vec3::new(-4.0, 1.0, -3.0),
        Vec3::new(2.0, 1.0, 1.25),
    );
    world
}
