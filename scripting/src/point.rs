//! World-space points at a signed distance from an actor.
//!
//! `point_X(dist, actor) == position(actor) + X(Some(dist), actor)` for each direction
//! query `X`. A negative `dist` lands on the opposite side; `0` is the actor's own
//! position. Distances are not range checked.

use crate::{ActorId, ActorSource, Result, ScriptContext, Vec3};

impl<S: ActorSource + ?Sized> ScriptContext<'_, S> {
    fn offset_from(&self, actor: Option<ActorId>, offset: Vec3) -> Result<Vec3> {
        Ok(self.source().position(self.resolve(actor))? + offset)
    }

    pub fn point_ahead(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.forward(Some(dist), actor)?)
    }

    pub fn point_behind(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.backward(Some(dist), actor)?)
    }

    pub fn point_above(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.up(Some(dist), actor)?)
    }

    pub fn point_below(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.down(Some(dist), actor)?)
    }

    pub fn point_to_right_of(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.right(Some(dist), actor)?)
    }

    pub fn point_to_left_of(&self, dist: f32, actor: Option<ActorId>) -> Result<Vec3> {
        self.offset_from(actor, self.left(Some(dist), actor)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ActorError, Quat, ScriptContext, SnapshotSource, Vec3, euler_to_quat};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn point_above_adds_world_up_for_identity_rotation() {
        let mut source = SnapshotSource::new();
        let pos = Vec3::new(3.0, 1.5, -7.0);
        let id = source.spawn(pos, Quat::identity());
        let ctx = ScriptContext::new(&source, id);

        assert_relative_eq!(ctx.point_above(2.0, None).unwrap(), pos + Vec3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(ctx.point_below(2.0, None).unwrap(), pos - Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn zero_distance_is_own_position() {
        let mut source = SnapshotSource::new();
        let pos = Vec3::new(-2.0, 0.5, 9.0);
        let id = source.spawn(pos, euler_to_quat(&Vec3::new(0.3, 1.0, -0.2)));
        let ctx = ScriptContext::new(&source, id);

        assert_relative_eq!(ctx.point_ahead(0.0, None).unwrap(), pos, epsilon = EPS);
        assert_relative_eq!(ctx.point_to_left_of(0.0, None).unwrap(), pos, epsilon = EPS);
    }

    #[test]
    fn negative_distance_lands_on_opposite_side() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(
            Vec3::new(1.0, 2.0, 3.0),
            euler_to_quat(&Vec3::new(-0.5, 2.4, 0.7)),
        );
        let ctx = ScriptContext::new(&source, id);

        for d in [0.5, 4.0, -3.25] {
            assert_relative_eq!(
                ctx.point_ahead(d, None).unwrap(),
                ctx.point_behind(-d, None).unwrap(),
                epsilon = EPS
            );
            assert_relative_eq!(
                ctx.point_above(d, None).unwrap(),
                ctx.point_below(-d, None).unwrap(),
                epsilon = EPS
            );
            assert_relative_eq!(
                ctx.point_to_right_of(d, None).unwrap(),
                ctx.point_to_left_of(-d, None).unwrap(),
                epsilon = EPS
            );
        }
    }

    #[test]
    fn point_ahead_follows_facing() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(
            Vec3::new(10.0, 0.0, 10.0),
            Quat::from_axis_angle(&Vec3::y_axis(), FRAC_PI_2),
        );
        let ctx = ScriptContext::new(&source, id);

        assert_relative_eq!(
            ctx.point_ahead(5.0, None).unwrap(),
            Vec3::new(15.0, 0.0, 10.0),
            epsilon = EPS
        );
        assert_relative_eq!(
            ctx.point_to_right_of(5.0, None).unwrap(),
            Vec3::new(10.0, 0.0, 5.0),
            epsilon = EPS
        );
    }

    #[test]
    fn queries_about_another_actor_use_its_pose() {
        let mut source = SnapshotSource::new();
        let me = source.spawn(Vec3::zeros(), Quat::identity());
        let other = source.spawn(Vec3::new(0.0, 0.0, 20.0), Quat::identity());
        let ctx = ScriptContext::new(&source, me);

        assert_relative_eq!(ctx.point_ahead(1.0, Some(other)).unwrap(), Vec3::new(0.0, 0.0, 21.0));
        assert_relative_eq!(ctx.point_ahead(1.0, None).unwrap(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut source = SnapshotSource::new();
        let id = source.spawn(Vec3::new(1.0, 1.0, 1.0), euler_to_quat(&Vec3::new(0.1, 0.2, 0.3)));
        let ctx = ScriptContext::new(&source, id);

        assert_eq!(ctx.point_ahead(3.0, None), ctx.point_ahead(3.0, None));
        assert_eq!(ctx.point_to_left_of(1.5, None), ctx.point_to_left_of(1.5, Some(id)));
    }

    #[test]
    fn unknown_actor_fails_without_a_value() {
        let source = SnapshotSource::new();
        let ctx = ScriptContext::new(&source, 5);

        assert_eq!(ctx.point_ahead(1.0, None), Err(ActorError::NotFound(5)));
        assert_eq!(ctx.point_to_right_of(1.0, Some(6)), Err(ActorError::NotFound(6)));
    }
}
