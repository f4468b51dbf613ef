//! Scene assembly.
//!
//! - [`build_world`] inserts every resource the systems need and registers
//!   the observers.
//! - [`add_simulation_systems`] adds the per-frame gameplay systems, in order,
//!   to a schedule. The binary wraps them with input polling before and text
//!   measurement plus rendering after.
//! - [`enter_play`] spawns the scene: petal markers, trigger zone, player,
//!   helper hint and the (still invisible) reveal entities.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};

use crate::assets::{HEART_SCENE, LOVELY, PETAL, POOKS};
use crate::components::animation::{Animation, AnimationController, Condition};
use crate::components::boxcollider::BoxCollider;
use crate::components::cameratarget::CameraTarget;
use crate::components::dynamictext::DynamicText;
use crate::components::facing::{Direction, Facing};
use crate::components::group::Group;
use crate::components::helperhint::HelperHint;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::triggerzone::TriggerZone;
use crate::components::zindex::ZIndex;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{
    AnimationStore, idle_animation_key, walk_animation_key, walk_frame_key,
};
use crate::resources::camera2d::{Camera2DRes, CameraFollow};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::reveal::RevealSequence;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureSizes;
use crate::resources::trail::{TrailLayout, TrailSpec};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_controller};
use crate::systems::camera::camera_follow_system;
use crate::systems::helperhint::helper_hint_system;
use crate::systems::inputwalkcontroller::{FACING_KEY, MOVING_FLAG, input_walk_controller};
use crate::systems::movement::movement;
use crate::systems::reveal::{advance_reveal_observer, start_reveal_observer};
use crate::systems::triggerzone::trigger_zone_system;
use crate::systems::ttl::ttl_system;
use crate::systems::tween::tween_alpha_system;

pub const PLAYER_GROUP: &str = "player";
pub const PLAYER_START: Vector2 = Vector2 { x: 400.0, y: 740.0 };
pub const PLAYER_SPEED: f32 = 120.0;

pub const HINT_TEXT: &str = "Use arrow keys or WASD keys to move";
pub const HINT_POS: Vector2 = Vector2 { x: 400.0, y: 772.0 };
pub const HINT_FADE_SECS: f32 = 0.6;

pub const ZONE_SIZE: f32 = 50.0;
/// Distance from the trail end up to the zone center.
pub const ZONE_RISE: f32 = 30.0;
pub const ZONE_SIGNAL: &str = "trail_end";

/// Distance from the trail end up to the reveal center.
pub const REVEAL_RISE: f32 = 60.0;
pub const CHARACTER_SIZE: f32 = 32.0;
pub const CHARACTER_SPREAD: f32 = 8.0;
pub const CHARACTER_DROP: f32 = 10.0;
pub const TITLE_TEXT: &str = "Happy Valentines Day!";
/// Gap between the heart's top edge and the title center.
pub const TITLE_GAP: f32 = 16.0;

const HINT_COLOR: Color = Color::new(0xff, 0xbb, 0xcc, 0xff);
const HINT_STROKE: Color = Color::new(0x1a, 0x0a, 0x1e, 0xff);
const TITLE_COLOR: Color = Color::new(0xff, 0x44, 0x77, 0xff);

/// Depth of each layer, back to front.
pub mod depth {
    pub const PETALS: i32 = 0;
    pub const PLAYER: i32 = 1;
    pub const HINT: i32 = 2;
    pub const HEART: i32 = 2;
    pub const CHARACTERS: i32 = 3;
    pub const TITLE: i32 = 3;
}

/// Create a world holding every resource the scene needs, with observers registered.
///
/// Raylib handles and the GPU texture store are added by the caller.
pub fn build_world(config: GameConfig, sizes: TextureSizes, debug: bool) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(AnimationStore::walk_cycles());
    world.insert_resource(TrailLayout::generate(&TrailSpec::default()));
    world.insert_resource(sizes);
    world.insert_resource(config);
    if debug {
        world.insert_resource(DebugMode {});
    }

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(start_reveal_observer));
    world.spawn(Observer::new(advance_reveal_observer));
    // Observers must exist before any system can trigger events
    world.flush();
    world
}

/// Add the gameplay systems in their fixed per-frame order.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            input_walk_controller,
            movement,
            trigger_zone_system,
            animation_controller,
            animation,
            helper_hint_system,
            tween_alpha_system,
            ttl_system,
            camera_follow_system,
        )
            .chain()
            .in_set(SimulationSet),
    );
}

/// Gameplay systems added by [`add_simulation_systems`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Animation rules for a four-way walker: `walk_{dir}` while moving,
/// `idle_{dir}` otherwise, both keyed on the `facing` signal.
pub fn walker_controller() -> AnimationController {
    let mut controller = AnimationController::new(idle_animation_key(Direction::Down));
    for dir in Direction::ALL {
        let facing = Condition::integer_eq(FACING_KEY, dir.code());
        controller = controller
            .with_rule(
                Condition::All(vec![Condition::has_flag(MOVING_FLAG), facing.clone()]),
                walk_animation_key(dir),
            )
            .with_rule(
                Condition::All(vec![Condition::lacks_flag(MOVING_FLAG), facing]),
                idle_animation_key(dir),
            );
    }
    controller
}

fn texture_size(sizes: &TextureSizes, key: &str) -> Vector2 {
    sizes.get(key).unwrap_or_else(|| {
        warn!("No size known for texture '{}'", key);
        Vector2::zero()
    })
}

/// Spawn the scene and point the camera at the player.
pub fn enter_play(
    mut commands: Commands,
    trail: Res<TrailLayout>,
    sizes: Res<TextureSizes>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
) {
    // Petal markers
    let petal_size = texture_size(&sizes, PETAL);
    for marker in &trail.markers {
        commands.spawn((
            Group::new("petals"),
            MapPosition::from_vec(marker.pos),
            ZIndex(depth::PETALS),
            Sprite::centered(PETAL, petal_size).with_flip_h(marker.flip_h),
        ));
    }

    // Trigger zone just above the last marker
    let zone = commands
        .spawn((
            Group::new("zone"),
            MapPosition::new(trail.end.x, trail.end.y - ZONE_RISE),
            BoxCollider::centered(ZONE_SIZE, ZONE_SIZE),
            TriggerZone::new(PLAYER_GROUP, ZONE_SIGNAL),
        ))
        .id();

    // Player
    let idle_key = walk_frame_key(Direction::Down, 1);
    let player_size = texture_size(&sizes, &idle_key);
    commands.spawn((
        Group::new(PLAYER_GROUP),
        MapPosition::from_vec(PLAYER_START),
        InputControlled::new(PLAYER_SPEED),
        RigidBody::new(),
        Facing(Direction::Down),
        Signals::default().with_integer(FACING_KEY, Direction::Down.code()),
        Animation::new(idle_animation_key(Direction::Down)),
        walker_controller(),
        Sprite::centered(idle_key, player_size),
        BoxCollider::centered(player_size.x, player_size.y),
        ZIndex(depth::PLAYER),
        CameraTarget,
    ));

    // Instructions
    commands.spawn((
        Group::new("hint"),
        MapPosition::from_vec(HINT_POS),
        DynamicText::new(HINT_TEXT, 14.0, HINT_COLOR).with_stroke(HINT_STROKE, 3.0),
        Tint::default(),
        ZIndex(depth::HINT),
        HelperHint::new(HINT_FADE_SECS),
    ));

    // Reveal, hidden until the zone fires
    let center = Vector2 {
        x: trail.end.x,
        y: trail.end.y - REVEAL_RISE,
    };
    let heart_size = texture_size(&sizes, HEART_SCENE);
    let character = Vector2 {
        x: CHARACTER_SIZE,
        y: CHARACTER_SIZE,
    };
    let heart = commands
        .spawn((
            Group::new("reveal"),
            MapPosition::from_vec(center),
            Sprite::centered(HEART_SCENE, heart_size),
            Tint::hidden(),
            ZIndex(depth::HEART),
        ))
        .id();
    let lovely = commands
        .spawn((
            Group::new("reveal"),
            MapPosition::new(center.x - CHARACTER_SPREAD, center.y + CHARACTER_DROP),
            Sprite::centered(LOVELY, character),
            Tint::hidden(),
            ZIndex(depth::CHARACTERS),
        ))
        .id();
    let pooks = commands
        .spawn((
            Group::new("reveal"),
            MapPosition::new(center.x + CHARACTER_SPREAD, center.y + CHARACTER_DROP),
            Sprite::centered(POOKS, character),
            Tint::hidden(),
            ZIndex(depth::CHARACTERS),
        ))
        .id();
    let title = commands
        .spawn((
            Group::new("reveal"),
            MapPosition::new(center.x, center.y - heart_size.y * 0.5 - TITLE_GAP),
            DynamicText::new(TITLE_TEXT, 18.0, TITLE_COLOR).with_stroke(Color::WHITE, 3.0),
            Tint::hidden(),
            ZIndex(depth::TITLE),
        ))
        .id();
    commands.insert_resource(RevealSequence::new(zone, heart, lovely, pooks, title));

    // Camera starts on the player
    let mut follow = CameraFollow::new(
        Vector2 {
            x: config.camera_lerp_x,
            y: config.camera_lerp_y,
        },
        config.round_pixels,
        PLAYER_START,
    );
    let shown = follow.snap(PLAYER_START);
    commands.insert_resource(Camera2DRes::looking_at(
        shown,
        screen.w as f32,
        screen.h as f32,
        config.camera_zoom,
    ));
    commands.insert_resource(follow);

    info!(
        "Scene ready: {} petals, trail end ({}, {})",
        trail.markers.len(),
        trail.end.x,
        trail.end.y
    );
}
