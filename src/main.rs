//! Petal Trail entry point.
//!
//! A short single-scene 2D game built on:
//! - **raylib** for windowing, graphics, input and texture loading
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! Walk the character along the petal trail; reaching its end plays a short
//! reveal.
//!
//! # Main Loop
//!
//! 1. Parse the command line, read `config.ini`
//! 2. Open the window and load every texture (any failure exits with status 1)
//! 3. Build the ECS world, register observers and spawn the scene
//! 4. Each frame: poll input, run the gameplay systems, measure texts, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --assets ./assets
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::exit;

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use clap::Parser;
use log::{error, info, warn};

use petaltrail::assets::{AssetManifest, load_textures};
use petaltrail::game::{SimulationSet, add_simulation_systems, build_world, enter_play};
use petaltrail::resources::gameconfig::GameConfig;
use petaltrail::systems::dynamictext_size::dynamictext_size_system;
use petaltrail::systems::input::update_input_state;
use petaltrail::systems::render::render_system;
use petaltrail::systems::time::update_world_time;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Petal Trail
#[derive(Parser)]
#[command(version, about = "Follow the petals to the end of the trail.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the game's images (overrides the config file).
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Start with the debug overlay enabled (F11 toggles it).
    #[arg(long)]
    debug: bool,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Early-exit: write defaults and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        let config = GameConfig::with_path(maybe_path.unwrap_or(config_path));
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            exit(1);
        }
        return;
    }

    let mut config = GameConfig::with_path(&config_path);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let manifest = AssetManifest::petal_trail();
    let textures = match load_textures(
        &mut rl,
        &thread,
        &manifest,
        &config.assets_dir,
        config.pixel_art,
    ) {
        Ok(store) => store,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = build_world(config, textures.sizes(), cli.debug);
    world.insert_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    if let Err(e) = world.run_system_once(enter_play) {
        error!("Failed to spawn the scene: {}", e);
        exit(1);
    }

    let mut update = Schedule::default();
    add_simulation_systems(&mut update);
    update.add_systems(update_input_state.before(SimulationSet));
    update.add_systems(
        (dynamictext_size_system, render_system)
            .chain()
            .after(SimulationSet),
    );
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    info!("Window closed, bye");
}
