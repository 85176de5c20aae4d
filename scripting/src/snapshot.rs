//! In-memory actor store.
//!
//! [`SnapshotSource`] is the smallest host that satisfies [`ActorSource`]: a map of
//! actor snapshots keyed by id. It is used by tests and by hosts that gather actor
//! state into a frame-local table before running scripts.
//!
//! # Model
//! - Each actor stores its world pose, its spawn rotation and an optional parent link.
//! - Local rotation is derived, never stored: `parent.rotation⁻¹ * rotation`.
//! - A parent link that no longer resolves fails the local rotation lookup with the
//!   parent's id, since that is the handle that is missing.

use std::collections::HashMap;

use crate::{ActorError, ActorId, ActorSource, Pose, Quat, Result, Vec3};

/// Plain record of the state a host exposes for one actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorSnapshot {
    pub position: Vec3,
    pub rotation: Quat,
    pub spawn_rotation: Quat,
    pub parent: Option<ActorId>,
}

impl ActorSnapshot {
    /// A parentless actor whose spawn rotation is its current rotation.
    pub fn spawned(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            spawn_rotation: rotation,
            parent: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SnapshotSource {
    actors: HashMap<ActorId, ActorSnapshot>,
    next_id: ActorId,
}

impl SnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a parentless actor and returns its freshly allocated id.
    ///
    /// Ids start at 1 and are never reused by this source.
    pub fn spawn(&mut self, position: Vec3, rotation: Quat) -> ActorId {
        self.next_id += 1;
        let id = self.next_id;
        self.actors
            .insert(id, ActorSnapshot::spawned(position, rotation));
        id
    }

    /// Spawns an actor attached to `parent`.
    pub fn spawn_child(
        &mut self,
        parent: ActorId,
        position: Vec3,
        rotation: Quat,
    ) -> Result<ActorId> {
        if !self.actors.contains_key(&parent) {
            return Err(ActorError::NotFound(parent));
        }
        let id = self.spawn(position, rotation);
        if let Some(actor) = self.actors.get_mut(&id) {
            actor.parent = Some(parent);
        }
        Ok(id)
    }

    /// Inserts or replaces the snapshot stored under `id`.
    pub fn insert(&mut self, id: ActorId, snapshot: ActorSnapshot) {
        self.next_id = self.next_id.max(id);
        self.actors.insert(id, snapshot);
    }

    pub fn remove(&mut self, id: ActorId) -> Option<ActorSnapshot> {
        self.actors.remove(&id)
    }

    pub fn get(&self, id: ActorId) -> Option<&ActorSnapshot> {
        self.actors.get(&id)
    }

    /// Overwrites the world pose of an existing actor. The spawn rotation is kept.
    pub fn set_pose(&mut self, id: ActorId, pose: Pose) -> Result<()> {
        let actor = self.actors.get_mut(&id).ok_or(ActorError::NotFound(id))?;
        actor.position = pose.translation;
        actor.rotation = pose.rotation;
        Ok(())
    }

    fn find(&self, id: ActorId) -> Result<&ActorSnapshot> {
        self.actors.get(&id).ok_or(ActorError::NotFound(id))
    }
}

impl ActorSource for SnapshotSource {
    fn position(&self, actor: ActorId) -> Result<Vec3> {
        Ok(self.find(actor)?.position)
    }

    fn rotation(&self, actor: ActorId) -> Result<Quat> {
        Ok(self.find(actor)?.rotation)
    }

    fn local_rotation(&self, actor: ActorId) -> Result<Quat> {
        let snapshot = self.find(actor)?;
        match snapshot.parent {
            Some(parent) => Ok(self.find(parent)?.rotation.inverse() * snapshot.rotation),
            None => Ok(snapshot.rotation),
        }
    }

    fn spawn_rotation(&self, actor: ActorId) -> Result<Quat> {
        Ok(self.find(actor)?.spawn_rotation)
    }
}
