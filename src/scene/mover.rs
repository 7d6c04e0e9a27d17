//! Kinematic capsule Mover for the demo level: apply the displacement, then
//! push the capsule out of whatever it penetrates.

use glam::Vec3;
use hecs::World;

use super::{Collider, Position};
use crate::locomotion::character::Mover;

/// A contact counts as ground when its push-out direction is mostly upward.
const GROUND_NORMAL_Y: f32 = 0.7;
/// Push-outs can shove the capsule into a neighboring collider, so resolution
/// relaxes over a couple of passes.
const RELAXATION_PASSES: usize = 2;

const CAPSULE_RADIUS: f32 = 0.3;
const CAPSULE_HALF_HEIGHT: f32 = 0.6;

/// Capsule body resolved against the static level by penetration push-out.
pub struct KinematicMover {
    world: World,
    position: Vec3,
    radius: f32,
    half_height: f32,
}

impl KinematicMover {
    pub fn new(world: World, spawn: Vec3) -> Self {
        Self {
            world,
            position: spawn,
            radius: CAPSULE_RADIUS,
            half_height: CAPSULE_HALF_HEIGHT,
        }
    }

    /// Capsule center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    fn resolve(&mut self) -> bool {
        let mut grounded = false;
        for _ in 0..RELAXATION_PASSES {
            let mut correction = Vec3::ZERO;
            let bottom = self.position - Vec3::Y * self.half_height;
            let top = self.position + Vec3::Y * self.half_height;
            for (_entity, (at, collider)) in self.world.query_mut::<(&Position, &Collider)>() {
                if let Some(push) = push_out(bottom, top, self.radius, at.0, collider) {
                    let depth = push.length();
                    if depth > 1e-6 && (push / depth).y > GROUND_NORMAL_Y {
                        grounded = true;
                    }
                    correction += push;
                }
            }
            if correction == Vec3::ZERO {
                break;
            }
            self.position += correction;
        }
        grounded
    }
}

impl Mover for KinematicMover {
    fn attempt_move(&mut self, displacement: Vec3) -> bool {
        self.position += displacement;
        self.resolve()
    }
}

fn closest_point_on_segment(a: Vec3, b: Vec3, p: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-12 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Vector that moves a capsule (`bottom`..`top` segment, `radius`) out of
/// `collider`, or `None` when they do not overlap.
fn push_out(bottom: Vec3, top: Vec3, radius: f32, at: Vec3, collider: &Collider) -> Option<Vec3> {
    match collider {
        Collider::Plane { normal, offset } => {
            let dist = bottom.dot(*normal).min(top.dot(*normal)) - offset;
            let penetration = radius - dist;
            (penetration > 0.0).then(|| *normal * penetration)
        }
        Collider::Aabb { half_extents } => {
            // Sphere test at the segment point nearest the box center.
            let center = closest_point_on_segment(bottom, top, at);
            let local = center - at;
            let clamped = local.clamp(-*half_extents, *half_extents);
            let diff = local - clamped;
            let dist = diff.length();
            if dist > 1e-6 {
                let penetration = radius - dist;
                (penetration > 0.0).then(|| diff / dist * penetration)
            } else {
                // Sphere center inside the box: exit through the nearest face.
                let gap = *half_extents - local.abs();
                let push = if gap.x <= gap.y && gap.x <= gap.z {
                    Vec3::X * (gap.x + radius) * local.x.signum()
                } else if gap.y <= gap.z {
                    Vec3::Y * (gap.y + radius) * local.y.signum()
                } else {
                    Vec3::Z * (gap.z + radius) * local.z.signum()
                };
                Some(push)
            }
        }
    }
}
