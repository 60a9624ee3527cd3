//! Fixed-capacity entity store.
//!
//! All entities live in a fixed array of [`MAX_ENTITY_COUNT`] slots; a free
//! slot is `None`. Allocation is a first-fit linear scan and identity is the
//! slot index, wrapped in [`EntityRef`]. There is no generation counter: a
//! released slot handed out again by a later allocation makes every old copy
//! of that `EntityRef` point at the new entity. That is memory safe but a
//! logic hazard, so refs should be treated as momentary. The one exception
//! is the player, which is spawned once and never released.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::sprites::SpriteId;

/// Capacity of the store. Sized for the fixed island population; filling it
/// up is a misconfiguration, not a runtime condition.
pub const MAX_ENTITY_COUNT: usize = 512;

/// The logical kind of an entity, deciding its construction and sprite.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Archetype {
    Rock,
    #[allow(dead_code)]
    Tree,
    Player,
    RaftTile,
}

#[derive(Clone, Copy, Debug)]
pub struct Entity {
    pub pos: Vector2,
    pub archetype: Archetype,
    pub sprite_id: SpriteId,
}

/// Handle to a slot of the store. Copyable and comparable; see the module
/// docs for the reuse caveat.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EntityRef(usize);

/// Slot index of the player entity, held for the whole run.
#[derive(Resource, Clone, Copy)]
pub struct PlayerRef(pub EntityRef);

#[derive(Resource)]
pub struct EntityStore {
    slots: [Option<Entity>; MAX_ENTITY_COUNT],
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_ENTITY_COUNT],
        }
    }

    /// First-fit allocation; panics when every slot is occupied.
    pub fn insert(&mut self, entity: Entity) -> EntityRef {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(entity);
                return EntityRef(index);
            }
        }
        panic!("entity count exceeded the limit of {MAX_ENTITY_COUNT}");
    }

    /// Free the slot for reuse. Releasing an already-free slot is a no-op.
    #[allow(dead_code)]
    pub fn release(&mut self, entity_ref: EntityRef) {
        self.slots[entity_ref.0] = None;
    }

    pub fn get(&self, entity_ref: EntityRef) -> Option<&Entity> {
        self.slots[entity_ref.0].as_ref()
    }

    pub fn get_mut(&mut self, entity_ref: EntityRef) -> Option<&mut Entity> {
        self.slots[entity_ref.0].as_mut()
    }

    /// Live entities in ascending slot order. This is the only iteration the
    /// store supports; there is no per-archetype index.
    pub fn iter(&self) -> impl Iterator<Item = (EntityRef, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entity| (EntityRef(index), entity)))
    }

    pub fn spawn_player(&mut self) -> EntityRef {
        self.insert(Entity {
            pos: Vector2 { x: 0.0, y: 0.0 },
            archetype: Archetype::Player,
            sprite_id: SpriteId::Player,
        })
    }

    /// Rocks come in two looks; each spawn picks one at random.
    pub fn spawn_rock(&mut self) -> EntityRef {
        let sprite_id = if fastrand::bool() {
            SpriteId::Rock0
        } else {
            SpriteId::Rock1
        };
        self.insert(Entity {
            pos: Vector2 { x: 0.0, y: 0.0 },
            archetype: Archetype::Rock,
            sprite_id,
        })
    }

    pub fn spawn_raft_tile(&mut self) -> EntityRef {
        self.insert(Entity {
            pos: Vector2 { x: 0.0, y: 0.0 },
            archetype: Archetype::RaftTile,
            sprite_id: SpriteId::RaftTile,
        })
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
