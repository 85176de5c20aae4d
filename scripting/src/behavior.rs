/*!
Stock actor scripts built on the query API.

A [`Behavior`] is stepped once per host tick with the scripted actor as the context's
current actor. It only reads state through the context and returns the pose the host
should commit; it never writes actor state itself.

Behaviors that reference another actor (`Orbit`, `Follow`) fail with that actor's
[`crate::ActorError::NotFound`] once it is gone. Internal state (the orbit phase) is
only advanced when the step succeeds.
*/

use std::f32::consts::{PI, TAU};

use nalgebra::Unit;

use crate::{ActorId, ActorSource, Pose, Quat, Result, ScriptContext, utils::yaw_rotation};

/// Below this squared distance the orbiter keeps its own rotation instead of facing
/// the center.
const FACING_EPS_SQ: f32 = 1.0e-12;

/// Schema-agnostic description of a scripted behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    /// Walk along the current facing at a constant speed.
    Advance { speed_mps: f32 },

    /// Turn in place about world up. Positive rates turn clockwise seen from above.
    Spin { yaw_rate_rad: f32 },

    /// Circle `target` at `radius` in the plane orthogonal to the target's up axis,
    /// always facing it.
    ///
    /// `phase` is the angle already travelled about the target's up, measured from its
    /// right side.
    Orbit {
        target: ActorId,
        radius: f32,
        angular_speed_rad: f32,
        phase: f32,
    },

    /// Stand `distance` behind `target`, matching its heading.
    Follow { target: ActorId, distance: f32 },
}

impl Behavior {
    /// Computes the next pose for the context's current actor over `dt_seconds`.
    ///
    /// Negative `dt_seconds` is treated as zero.
    pub fn step<S: ActorSource + ?Sized>(
        &mut self,
        ctx: &ScriptContext<'_, S>,
        dt_seconds: f32,
    ) -> Result<Pose> {
        let dt = dt_seconds.max(0.0);

        match self {
            Behavior::Advance { speed_mps } => Ok(Pose::new(
                ctx.point_ahead(*speed_mps * dt, None)?,
                ctx.rot(None)?,
            )),

            Behavior::Spin { yaw_rate_rad } => Ok(Pose::new(
                ctx.pos(None)?,
                yaw_rotation(*yaw_rate_rad * dt) * ctx.rot(None)?,
            )),

            Behavior::Orbit {
                target,
                radius,
                angular_speed_rad,
                phase,
            } => {
                let next_phase = wrap_phase(*phase + *angular_speed_rad * dt);
                let center = ctx.pos(Some(*target))?;
                let arm = ctx.right(Some(*radius), Some(*target))?;
                let axis = Unit::new_normalize(ctx.up(None, Some(*target))?);
                let translation = center + Quat::from_axis_angle(&axis, next_phase) * arm;

                let to_center = center - translation;
                let rotation = if to_center.norm_squared() > FACING_EPS_SQ {
                    Quat::face_towards(&to_center, axis.as_ref())
                } else {
                    ctx.rot(None)?
                };

                *phase = next_phase;
                Ok(Pose::new(translation, rotation))
            }

            Behavior::Follow { target, distance } => Ok(Pose::new(
                ctx.point_behind(*distance, Some(*target))?,
                yaw_rotation(ctx.yaw(Some(*target))?),
            )),
        }
    }
}

/// Keeps an accumulated phase in `(-π, π]` so it never loses precision.
fn wrap_phase(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActorError, Quat, SnapshotSource, Vec3, euler_to_quat};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn advance_moves_along_facing() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(Vec3::new(1.0, 0.0, 1.0), yaw_rotation(FRAC_PI_2));
        let ctx = ScriptContext::new(&source, id);

        let mut behavior = Behavior::Advance { speed_mps: 4.0 };
        let pose = behavior.step(&ctx, 0.5).unwrap();

        assert_relative_eq!(pose.translation, Vec3::new(3.0, 0.0, 1.0), epsilon = EPS);
        assert_relative_eq!(pose.rotation, yaw_rotation(FRAC_PI_2));
    }

    #[test]
    fn negative_dt_does_not_move() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(Vec3::new(1.0, 2.0, 3.0), Quat::identity());
        let ctx = ScriptContext::new(&source, id);

        let pose = Behavior::Advance { speed_mps: 10.0 }.step(&ctx, -1.0).unwrap();
        assert_relative_eq!(pose.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn spin_turns_in_place() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(Vec3::new(0.0, 1.0, 0.0), yaw_rotation(0.25));
        let ctx = ScriptContext::new(&source, id);

        let pose = Behavior::Spin { yaw_rate_rad: 1.0 }.step(&ctx, 0.5).unwrap();
        source.set_pose(id, pose).unwrap();
        let ctx = ScriptContext::new(&source, id);

        assert_relative_eq!(pose.translation, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(ctx.yaw(None).unwrap(), 0.75, epsilon = EPS);
    }

    #[test]
    fn orbit_circles_and_faces_target() {
        let mut source = SnapshotSource::new();
        let center = source.spawn(Vec3::zeros(), Quat::identity());
        let me = source.spawn(Vec3::new(2.0, 0.0, 0.0), Quat::identity());
        let ctx = ScriptContext::new(&source, me);

        let mut behavior = Behavior::Orbit {
            target: center,
            radius: 2.0,
            angular_speed_rad: FRAC_PI_2,
            phase: 0.0,
        };
        let pose = behavior.step(&ctx, 1.0).unwrap();

        assert_relative_eq!(pose.translation, Vec3::new(0.0, 0.0, -2.0), epsilon = EPS);
        // Facing +Z points back at the center.
        assert_relative_eq!(pose.rotation * Vec3::z(), Vec3::z(), epsilon = EPS);
        match behavior {
            Behavior::Orbit { phase, .. } => assert_relative_eq!(phase, FRAC_PI_2, epsilon = EPS),
            other => panic!("unexpected behavior {other:?}"),
        }
    }

    #[test]
    fn orbit_follows_a_rolled_target_up_axis() {
        let mut source = SnapshotSource::new();
        // Rolled a quarter turn: its right is world +Y and its up is world -X.
        let center = source.spawn(
            Vec3::new(1.0, 0.0, 0.0),
            euler_to_quat(&Vec3::new(0.0, 0.0, FRAC_PI_2)),
        );
        let me = source.spawn(Vec3::zeros(), yaw_rotation(0.3));
        let ctx = ScriptContext::new(&source, me);
        let center_pos = Vec3::new(1.0, 0.0, 0.0);

        let mut behavior = Behavior::Orbit {
            target: center,
            radius: 2.0,
            angular_speed_rad: FRAC_PI_2,
            phase: 0.0,
        };
        let expected = [Vec3::new(1.0, 0.0, -2.0), Vec3::new(1.0, -2.0, 0.0)];

        for want in expected {
            let pose = behavior.step(&ctx, 1.0).unwrap();
            let to_center = (center_pos - pose.translation).normalize();

            assert_relative_eq!(pose.translation, want, epsilon = EPS);
            assert_relative_eq!((pose.translation - center_pos).norm(), 2.0, epsilon = EPS);
            assert_relative_eq!((pose.rotation * Vec3::z()).dot(&to_center), 1.0, epsilon = EPS);
        }
    }

    #[test]
    fn orbit_keeps_phase_when_target_is_gone() {
        let mut source = SnapshotSource::new();
        let me = source.spawn(Vec3::zeros(), Quat::identity());
        let ctx = ScriptContext::new(&source, me);

        let mut behavior = Behavior::Orbit {
            target: 77,
            radius: 1.0,
            angular_speed_rad: 1.0,
            phase: 0.4,
        };
        assert_eq!(behavior.step(&ctx, 1.0), Err(ActorError::NotFound(77)));
        assert_eq!(
            behavior,
            Behavior::Orbit {
                target: 77,
                radius: 1.0,
                angular_speed_rad: 1.0,
                phase: 0.4,
            }
        );
    }

    #[test]
    fn follow_stands_behind_target_with_its_heading() {
        let mut source = SnapshotSource::new();
        let leader = source.spawn(
            Vec3::new(5.0, 0.0, 5.0),
            euler_to_quat(&Vec3::new(0.0, FRAC_PI_2, 0.0)),
        );
        let me = source.spawn(Vec3::zeros(), Quat::identity());
        let ctx = ScriptContext::new(&source, me);

        let pose = Behavior::Follow {
            target: leader,
            distance: 3.0,
        }
        .step(&ctx, 0.1)
        .unwrap();

        assert_relative_eq!(pose.translation, Vec3::new(2.0, 0.0, 5.0), epsilon = EPS);
        assert_relative_eq!(ctx.with_actor(leader).yaw(None).unwrap(), FRAC_PI_2, epsilon = EPS);
        assert_relative_eq!(pose.rotation * Vec3::z(), Vec3::x(), epsilon = EPS);
    }

    #[test]
    fn wrap_phase_stays_half_open() {
        assert_relative_eq!(wrap_phase(0.5), 0.5, epsilon = EPS);
        assert_relative_eq!(wrap_phase(TAU + 0.5), 0.5, epsilon = EPS);
        assert_relative_eq!(wrap_phase(-PI), PI, epsilon = EPS);
        assert_relative_eq!(wrap_phase(3.0 * PI), PI, epsilon = 1.0e-4);
    }
}
