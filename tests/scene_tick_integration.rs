//! Scene tick integration tests: the full gameplay schedule driven without a window.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use raylib::prelude::Vector2;

use petaltrail::assets::{HEART_SCENE, LOVELY, PETAL, POOKS};
use petaltrail::components::animation::Animation;
use petaltrail::components::cameratarget::CameraTarget;
use petaltrail::components::dynamictext::DynamicText;
use petaltrail::components::facing::{Direction, Facing};
use petaltrail::components::group::Group;
use petaltrail::components::helperhint::HelperHint;
use petaltrail::components::mapposition::MapPosition;
use petaltrail::components::rigidbody::RigidBody;
use petaltrail::components::sprite::Sprite;
use petaltrail::components::tint::Tint;
use petaltrail::components::tween::TweenAlpha;
use petaltrail::components::zindex::ZIndex;
use petaltrail::events::switchdebug::SwitchDebugEvent;
use petaltrail::events::zone::ZoneEnteredEvent;
use petaltrail::game::{add_simulation_systems, build_world, enter_play};
use petaltrail::resources::animationstore::walk_frame_key;
use petaltrail::resources::camera2d::Camera2DRes;
use petaltrail::resources::debugmode::DebugMode;
use petaltrail::resources::gameconfig::GameConfig;
use petaltrail::resources::input::InputState;
use petaltrail::resources::reveal::{RevealSequence, RevealStage};
use petaltrail::resources::texturestore::TextureSizes;
use petaltrail::resources::worldtime::WorldTime;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn sizes() -> TextureSizes {
    let mut sizes = TextureSizes::default();
    for dir in Direction::ALL {
        for n in 1..=6 {
            sizes.insert(walk_frame_key(dir, n), Vector2 { x: 16.0, y: 24.0 });
        }
    }
    sizes.insert(PETAL, Vector2 { x: 16.0, y: 16.0 });
    sizes.insert(HEART_SCENE, Vector2 { x: 96.0, y: 80.0 });
    sizes.insert(LOVELY, Vector2 { x: 64.0, y: 64.0 });
    sizes.insert(POOKS, Vector2 { x: 64.0, y: 64.0 });
    sizes
}

fn scene(delta: f32) -> World {
    let mut world = build_world(GameConfig::new(), sizes(), false);
    world.resource_mut::<WorldTime>().delta = delta;
    world.run_system_once(enter_play).unwrap();
    world
}

fn simulation() -> Schedule {
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    schedule
}

fn hold(world: &mut World, dirs: &[Direction]) {
    let mut input = world.resource_mut::<InputState>();
    input.maindirection_up.active = dirs.contains(&Direction::Up);
    input.maindirection_down.active = dirs.contains(&Direction::Down);
    input.secondarydirection_left.active = dirs.contains(&Direction::Left);
    input.secondarydirection_right.active = dirs.contains(&Direction::Right);
}

fn player(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<CameraTarget>>()
        .single(world)
        .unwrap()
}

fn player_pos(world: &mut World) -> Vector2 {
    let e = player(world);
    world.get::<MapPosition>(e).unwrap().pos
}

fn group_count(world: &mut World, name: &str) -> usize {
    world
        .query::<&Group>()
        .iter(world)
        .filter(|g| g.name() == name)
        .count()
}

#[derive(Resource, Default)]
struct ZoneLog(Vec<ZoneEnteredEvent>);

fn record_zone(trigger: On<ZoneEnteredEvent>, mut log: ResMut<ZoneLog>) {
    log.0.push(trigger.event().clone());
}

// ==================== SPAWN ====================

#[test]
fn test_scene_spawn_counts_and_positions() {
    let mut world = scene(0.0);

    assert_eq!(group_count(&mut world, "petals"), 28);
    assert_eq!(group_count(&mut world, "player"), 1);
    assert_eq!(group_count(&mut world, "zone"), 1);
    assert_eq!(group_count(&mut world, "hint"), 1);
    assert_eq!(group_count(&mut world, "reveal"), 4);

    let flipped = world
        .query::<(&Group, &Sprite)>()
        .iter(&world)
        .filter(|(g, s)| g.name() == "petals" && s.flip_h)
        .count();
    assert_eq!(flipped, 14);

    assert_eq!(player_pos(&mut world), Vector2 { x: 400.0, y: 740.0 });
    let p = player(&mut world);
    assert_eq!(world.get::<Facing>(p).unwrap().0, Direction::Down);
    assert_eq!(world.get::<Sprite>(p).unwrap().tex_key, "down_1");
    assert_eq!(world.get::<ZIndex>(p).unwrap().0, 1);

    let hint = world
        .query_filtered::<&MapPosition, With<HelperHint>>()
        .single(&world)
        .unwrap();
    assert_eq!(hint.pos, Vector2 { x: 400.0, y: 772.0 });

    let reveal = world.resource::<RevealSequence>().clone();
    assert_eq!(reveal.stage, RevealStage::Hidden);
    let pos = |world: &World, e: Entity| world.get::<MapPosition>(e).unwrap().pos;
    assert_eq!(pos(&world, reveal.zone), Vector2 { x: 859.0, y: -248.0 });
    assert_eq!(pos(&world, reveal.heart), Vector2 { x: 859.0, y: -278.0 });
    assert_eq!(pos(&world, reveal.lovely), Vector2 { x: 851.0, y: -268.0 });
    assert_eq!(pos(&world, reveal.pooks), Vector2 { x: 867.0, y: -268.0 });
    // 80 px tall heart: top edge at -318, title 16 above it
    assert_eq!(pos(&world, reveal.title), Vector2 { x: 859.0, y: -334.0 });
    assert_eq!(
        world.get::<DynamicText>(reveal.title).unwrap().text,
        "Happy Valentines Day!"
    );

    for e in [reveal.heart, reveal.lovely, reveal.pooks, reveal.title] {
        assert_eq!(world.get::<Tint>(e).unwrap().opacity(), 0.0);
        assert!(world.get::<TweenAlpha>(e).is_none());
    }
    let lovely = world.get::<Sprite>(reveal.lovely).unwrap();
    assert_eq!((lovely.width, lovely.height), (32.0, 32.0));

    // Camera snapped onto the player
    let cam = world.resource::<Camera2DRes>().0;
    assert_eq!(cam.target, Vector2 { x: 400.0, y: 740.0 });
    assert_eq!(cam.zoom, 2.0);
}

// ==================== MOVEMENT ====================

#[test]
fn test_left_and_right_held_moves_left() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    hold(&mut world, &[Direction::Left, Direction::Right]);
    schedule.run(&mut world);

    let p = player(&mut world);
    assert_eq!(
        world.get::<RigidBody>(p).unwrap().velocity,
        Vector2 { x: -120.0, y: 0.0 }
    );
    assert_eq!(world.get::<Facing>(p).unwrap().0, Direction::Left);
    let pos = player_pos(&mut world);
    assert!(approx_eq(pos.x, 388.0));
    assert!(approx_eq(pos.y, 740.0));
}

#[test]
fn test_up_and_down_held_moves_up() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    hold(&mut world, &[Direction::Up, Direction::Down]);
    schedule.run(&mut world);

    let p = player(&mut world);
    assert_eq!(
        world.get::<RigidBody>(p).unwrap().velocity,
        Vector2 { x: 0.0, y: -120.0 }
    );
    assert_eq!(world.get::<Facing>(p).unwrap().0, Direction::Up);
}

#[test]
fn test_diagonal_is_not_normalized_and_faces_vertical() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    hold(&mut world, &[Direction::Right, Direction::Down]);
    schedule.run(&mut world);

    let p = player(&mut world);
    assert_eq!(
        world.get::<RigidBody>(p).unwrap().velocity,
        Vector2 { x: 120.0, y: 120.0 }
    );
    assert_eq!(world.get::<Facing>(p).unwrap().0, Direction::Down);
    let pos = player_pos(&mut world);
    assert!(approx_eq(pos.x, 412.0));
    assert!(approx_eq(pos.y, 752.0));
}

#[test]
fn test_walk_cycle_and_idle_pose() {
    let mut world = scene(1.0 / 60.0);
    let mut schedule = simulation();
    let p = player(&mut world);

    hold(&mut world, &[Direction::Left]);
    schedule.run(&mut world);
    assert_eq!(world.get::<Animation>(p).unwrap().animation_key, "walk_left");
    assert_eq!(world.get::<Sprite>(p).unwrap().tex_key, "left_1");

    for _ in 0..7 {
        schedule.run(&mut world);
    }
    assert_eq!(world.get::<Sprite>(p).unwrap().tex_key, "left_2");

    hold(&mut world, &[]);
    schedule.run(&mut world);
    assert_eq!(world.get::<RigidBody>(p).unwrap().velocity, Vector2::zero());
    assert_eq!(world.get::<Facing>(p).unwrap().0, Direction::Left);
    assert_eq!(world.get::<Animation>(p).unwrap().animation_key, "idle_left");
    assert_eq!(world.get::<Sprite>(p).unwrap().tex_key, "left_1");

    // Idle stays put
    let before = player_pos(&mut world);
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    assert_eq!(player_pos(&mut world), before);
    assert_eq!(world.get::<Sprite>(p).unwrap().tex_key, "left_1");
}

#[test]
fn test_boundary_walk_up_then_right() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    let p = player(&mut world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vector2 { x: 400.0, y: 700.0 };

    hold(&mut world, &[Direction::Up]);
    for _ in 0..60 {
        schedule.run(&mut world);
        if player_pos(&mut world).y < 241.0 {
            break;
        }
    }
    let pos = player_pos(&mut world);
    assert!(pos.y < 241.0);
    assert_eq!(pos.x, 400.0);

    hold(&mut world, &[Direction::Right]);
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    let after = player_pos(&mut world);
    assert!(approx_eq(after.x, 520.0));
    assert_eq!(after.y, pos.y);
}

// ==================== HELPER HINT ====================

#[test]
fn test_hint_stays_while_idle() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    for _ in 0..20 {
        schedule.run(&mut world);
    }
    let (hint, tint) = world
        .query::<(&HelperHint, &Tint)>()
        .single(&world)
        .unwrap();
    assert!(!hint.fading);
    assert_eq!(tint.opacity(), 1.0);
}

#[test]
fn test_hint_fades_once_then_despawns() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    let hint = world
        .query_filtered::<Entity, With<HelperHint>>()
        .single(&world)
        .unwrap();

    hold(&mut world, &[Direction::Right]);
    for _ in 0..3 {
        schedule.run(&mut world);
    }
    assert!(world.get::<HelperHint>(hint).unwrap().fading);
    // Started on the first moving frame, never restarted
    let tween = world.get::<TweenAlpha>(hint).unwrap();
    assert!(approx_eq(tween.time, 0.3), "tween time {}", tween.time);
    assert!(world.get::<Tint>(hint).unwrap().opacity() < 0.6);

    // Stop and start again: still the same fade
    hold(&mut world, &[]);
    schedule.run(&mut world);
    hold(&mut world, &[Direction::Up]);
    schedule.run(&mut world);
    assert!(approx_eq(world.get::<TweenAlpha>(hint).unwrap().time, 0.5));

    for _ in 0..3 {
        schedule.run(&mut world);
    }
    assert!(world.get_entity(hint).is_err());
    assert_eq!(group_count(&mut world, "hint"), 0);
}

// ==================== TRIGGER ZONE & REVEAL ====================

fn put_player_in_zone(world: &mut World) {
    let zone = world.resource::<RevealSequence>().zone;
    let zone_pos = world.get::<MapPosition>(zone).unwrap().pos;
    let p = player(world);
    world.get_mut::<MapPosition>(p).unwrap().pos = zone_pos;
}

#[test]
fn test_zone_fires_once_for_many_overlapping_frames() {
    let mut world = scene(0.1);
    world.insert_resource(ZoneLog::default());
    world.spawn(Observer::new(record_zone));
    world.flush();
    let mut schedule = simulation();

    put_player_in_zone(&mut world);
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    // Walk out and back in
    hold(&mut world, &[Direction::Down]);
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    hold(&mut world, &[]);
    put_player_in_zone(&mut world);
    for _ in 0..10 {
        schedule.run(&mut world);
    }

    let log = &world.resource::<ZoneLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].zone, world.resource::<RevealSequence>().zone);
    assert_eq!(log[0].signal, "trail_end");
}

#[test]
fn test_zone_not_fired_at_start() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    for _ in 0..5 {
        schedule.run(&mut world);
    }
    assert_eq!(world.resource::<RevealSequence>().stage, RevealStage::Hidden);
}

#[test]
fn test_reveal_stages_in_order() {
    let mut world = scene(0.1);
    let mut schedule = simulation();
    let reveal = world.resource::<RevealSequence>().clone();

    put_player_in_zone(&mut world);
    schedule.run(&mut world);
    assert_eq!(
        world.resource::<RevealSequence>().stage,
        RevealStage::HeartFadingIn
    );
    assert!(world.get::<TweenAlpha>(reveal.heart).is_some());

    // Second stage waits for the heart to finish
    let mut ticks = 0;
    while world.resource::<RevealSequence>().stage == RevealStage::HeartFadingIn {
        for e in reveal.second_stage() {
            assert!(world.get::<TweenAlpha>(e).is_none());
            assert_eq!(world.get::<Tint>(e).unwrap().opacity(), 0.0);
        }
        schedule.run(&mut world);
        ticks += 1;
        assert!(ticks < 30, "heart fade never finished");
    }
    assert_eq!(
        world.resource::<RevealSequence>().stage,
        RevealStage::CharactersAndTitleFadingIn
    );
    assert_eq!(world.get::<Tint>(reveal.heart).unwrap().opacity(), 1.0);
    // Heart fade lasts 1.5 s
    assert!((14..=16).contains(&(ticks + 1)), "ticks {}", ticks + 1);

    // All three start together, from zero
    for e in reveal.second_stage() {
        let tween = world.get::<TweenAlpha>(e).unwrap();
        assert!(tween.playing);
        assert_eq!(tween.time, 0.0);
    }
    assert!(approx_eq(
        world.get::<TweenAlpha>(reveal.lovely).unwrap().duration,
        1.0
    ));
    assert!(approx_eq(
        world.get::<TweenAlpha>(reveal.title).unwrap().duration,
        1.2
    ));

    let mut ticks = 0;
    while world.resource::<RevealSequence>().stage != RevealStage::Settled {
        schedule.run(&mut world);
        ticks += 1;
        assert!(ticks < 30, "second stage never settled");
    }
    for e in [reveal.heart, reveal.lovely, reveal.pooks, reveal.title] {
        assert_eq!(world.get::<Tint>(e).unwrap().opacity(), 1.0);
    }

    // Nothing changes afterwards
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    assert_eq!(world.resource::<RevealSequence>().stage, RevealStage::Settled);
}

// ==================== DEBUG TOGGLE ====================

#[test]
fn test_switch_debug_event_toggles_resource() {
    let mut world = scene(0.0);
    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}
