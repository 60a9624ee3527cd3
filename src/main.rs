//! Islander main entry point.
//!
//! A tiny island sandbox written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for resources, systems, and the frame schedule
//!
//! The player walks a raft floating among scattered rocks; the camera glides
//! after them, the mouse wheel zooms, and the tile under the mouse carries a
//! selection sprite with hover highlighting on anything standing there.
//!
//! # Project Structure
//!
//! - [`math`] – tile-grid conversion and exponential smoothing
//! - [`resources`] – ECS resources (entity slots, sprites, camera, input, time)
//! - [`systems`] – per-frame systems (input, camera, movement, picking, render)
//! - [`events`] – observer events (quit, fullscreen, debug overlay)
//! - [`game`] – startup island population
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, load sprites and the debug font
//! 2. Build the ECS world and spawn the island (player, raft, rocks)
//! 3. Register observers and the chained update schedule
//! 4. Run until close: poll input, update camera and player, pick the
//!    hovered tile, render, track fps
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod events;
mod game;
mod math;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::{Camera2D, Vector2};

use crate::events::quit::quit_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::resources::camera::{Camera2DRes, CameraRig};
use crate::resources::cursor::CursorTile;
use crate::resources::entities::{EntityStore, PlayerRef};
use crate::resources::fontstore::FontStore;
use crate::resources::fpscounter::FpsCounter;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::quit::QuitRequested;
use crate::resources::sprites::{SpriteId, SpriteStore};
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_system;
use crate::systems::cursor::cursor_under_mouse;
use crate::systems::input::update_input_state;
use crate::systems::movement::player_movement;
use crate::systems::render::render_system;
use crate::systems::time::{track_fps, update_world_time};

/// Islander
#[derive(Parser)]
#[command(version, about = "A tiny island sandbox on raylib and bevy_ecs")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    log::info!("Islander starting");

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Islander")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is a quit event for us, not a raylib exit key
    rl.set_exit_key(None);

    let start_fullscreen = config.fullscreen;
    if start_fullscreen {
        rl.maximize_window();
        rl.toggle_fullscreen();
    }

    let mut sprites = SpriteStore::new();
    sprites.load(&mut rl, &thread, SpriteId::Nil, "./assets/sprites/white.png");
    sprites.load(&mut rl, &thread, SpriteId::Player, "./assets/sprites/player.png");
    sprites.load(&mut rl, &thread, SpriteId::Rock0, "./assets/sprites/rock0.png");
    sprites.load(&mut rl, &thread, SpriteId::Rock1, "./assets/sprites/rock1.png");
    sprites.load(&mut rl, &thread, SpriteId::Select, "./assets/sprites/selection.png");
    sprites.load(&mut rl, &thread, SpriteId::RaftTile, "./assets/sprites/raft_tile.png");

    let mut fonts = FontStore::new();
    let debug_font = rl
        .load_font(&thread, "./assets/fonts/debug.ttf")
        .expect("Failed to load the debug font");
    fonts.add("debug", debug_font);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(CursorTile::default());
    world.insert_resource(FpsCounter::default());

    let rig = CameraRig::default();
    world.insert_resource(Camera2DRes(Camera2D {
        target: rig.pos,
        offset: Vector2 {
            x: rl.get_screen_width() as f32 * 0.5,
            y: rl.get_screen_height() as f32 * 0.5,
        },
        rotation: 0.0,
        zoom: rig.zoom,
    }));
    world.insert_resource(rig);
    world.insert_resource(config);
    if start_fullscreen {
        world.insert_resource(FullScreen {});
    }

    let mut store = EntityStore::new();
    let player = game::populate_island(&mut store);
    world.insert_resource(store);
    world.insert_resource(PlayerRef(player));

    world.insert_non_send_resource(sprites);
    world.insert_non_send_resource(fonts);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(quit_observer));
    world.spawn(Observer::new(switch_fullscreen_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must be registered before any system can trigger their events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            camera_system,
            player_movement,
            cursor_under_mouse,
        )
            .chain(),
    );
    update.add_systems(render_system.after(cursor_under_mouse));
    update.add_systems(track_fps.after(render_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.contains_resource::<QuitRequested>()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // The window may have been resized or toggled fullscreen this frame
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    log::info!("Islander shutting down");
}
