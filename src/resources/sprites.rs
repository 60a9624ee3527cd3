//! Sprite registry.
//!
//! A fixed table mapping [`SpriteId`] to a loaded texture and its pixel size.
//! Slot 0 is the nil/fallback sprite: lookups for a slot that was never
//! registered degrade to it silently, because a lookup happens inside the
//! render loop and must never fail there. Registration happens once at
//! startup and a missing image aborts with a diagnostic.
//!
//! Note: this is a non-send resource because raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D, Vector2};

/// Identifiers of every sprite the game draws. Doubles as the table index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpriteId {
    Nil = 0,
    Player,
    Rock0,
    Rock1,
    Select,
    RaftTile,
}

pub const SPRITE_COUNT: usize = 6;

impl SpriteId {
    fn index(self) -> usize {
        self as usize
    }
}

/// A loaded texture and its intrinsic size in pixels (drawn 1:1 as world
/// units).
pub struct Sprite {
    pub texture: Texture2D,
    pub size: Vector2,
}

/// Fixed sprite table; insert with `insert_non_send_resource` and access via
/// `NonSend`/`NonSendMut` in system parameters.
pub struct SpriteStore {
    sprites: [Option<Sprite>; SPRITE_COUNT],
}

impl SpriteStore {
    pub fn new() -> Self {
        Self {
            sprites: std::array::from_fn(|_| None),
        }
    }

    /// Load the texture at `path` into the slot for `id`. A missing or
    /// unreadable image is a startup-fatal misconfiguration.
    pub fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, id: SpriteId, path: &str) {
        let texture = rl
            .load_texture(thread, path)
            .unwrap_or_else(|e| panic!("loading sprite {id:?} from {path} failed: {e}"));
        let size = Vector2 {
            x: texture.width as f32,
            y: texture.height as f32,
        };
        self.sprites[id.index()] = Some(Sprite { texture, size });
    }

    /// Sprite for `id`, or the nil sprite when that slot was never registered.
    pub fn get(&self, id: SpriteId) -> &Sprite {
        self.sprites[id.index()]
            .as_ref()
            .or(self.sprites[SpriteId::Nil.index()].as_ref())
            .expect("nil sprite is registered at startup")
    }
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::new()
    }
}
