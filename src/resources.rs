use amethyst::ecs::Entity;
use std::collections::{HashMap, HashSet};

use crate::orbit::{BodyId, OrbitalModel};

/// Which entity draws which body. Owned by the scene, never by the orbital model.
#[derive(Default)]
pub struct BodyHandles {
    entities: HashMap<BodyId, Entity>,
}

impl BodyHandles {
    pub fn insert(&mut self, id: BodyId, entity: Entity) {
        if let Some(old) = self.entities.insert(id.clone(), entity) {
            warn!("Body {} was already bound to {:?}", id, old);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BodyId, &Entity)> {
        self.entities.iter()
    }
}

/// Body currently targeted by the speed controls, as an index into `OrbitalModel::bodies`.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Selection {
    pub index: usize,
}

impl Selection {
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn body<'m>(&self, model: &'m OrbitalModel) -> Option<&'m BodyId> {
        model.bodies().get(self.index).map(|b| &b.id)
    }
}

/// Turns held keys into single presses.
#[derive(Default, Debug)]
pub struct KeyLatch {
    held: HashSet<&'static str>,
}

impl KeyLatch {
    /// True only on the frame `action` goes from up to down.
    pub fn pressed(&mut self, action: &'static str, is_down: bool) -> bool {
        if is_down {
            self.held.insert(action)
        } else {
            self.held.remove(action);
            false
        }
    }
}
