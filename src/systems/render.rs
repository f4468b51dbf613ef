//! Rendering.
//!
//! [`render_system`] is an exclusive system: it takes the raylib handle and
//! thread out of the world for the duration of the frame, draws, and puts
//! them back.
//!
//! World pass (inside the 2D camera):
//! - sprites and texts sorted by [`ZIndex`], lowest first
//! - sprites whose box lies outside the camera view are skipped
//! - [`Tint`] modulates sprites directly and multiplies text fill and stroke
//!
//! Debug overlay (only while [`DebugMode`] exists): colliders, pivots, trail
//! bounds and corners in world space, plus FPS, camera, player position and
//! reveal stage in screen space.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::cameratarget::CameraTarget;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::reveal::RevealSequence;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::trail::TrailLayout;

enum Drawable {
    Sprite(Sprite),
    Text(DynamicText),
}

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        warn!("render_system: no RaylibHandle in world");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        warn!("render_system: no RaylibThread in world");
        world.insert_non_send_resource(rl);
        return;
    };

    let background = world
        .get_resource::<GameConfig>()
        .map(|c| c.background)
        .unwrap_or(Color::BLACK);

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(background);
        if let Some(cam) = world.get_resource::<Camera2DRes>().map(|c| c.0) {
            let mut d2 = d.begin_mode2D(cam);
            render_pass(world, &mut d2, cam);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw every sprite and text of the world inside the camera transform.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>, cam: Camera2D) {
    let screen = *world.resource::<ScreenSize>();

    // Visible world-rect from the screen corners
    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    let mut to_draw: Vec<(i32, Vector2, Option<Tint>, Drawable)> = Vec::new();
    {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Tint>)>();
        for (s, p, z, tint) in q.iter(world) {
            let min = Vector2 {
                x: p.pos.x - s.origin.x,
                y: p.pos.y - s.origin.y,
            };
            let max = Vector2 {
                x: min.x + s.width,
                y: min.y + s.height,
            };
            let visible = !(max.x < view_min.x
                || min.x > view_max.x
                || max.y < view_min.y
                || min.y > view_max.y);
            if visible {
                to_draw.push((z.0, p.pos, tint.copied(), Drawable::Sprite(s.clone())));
            }
        }
    }
    {
        let mut q = world.query::<(&DynamicText, &MapPosition, &ZIndex, Option<&Tint>)>();
        for (t, p, z, tint) in q.iter(world) {
            to_draw.push((z.0, p.pos, tint.copied(), Drawable::Text(t.clone())));
        }
    }

    // Stable: equal depths keep spawn order
    to_draw.sort_by_key(|(z, ..)| *z);

    let textures = world.resource::<TextureStore>();
    let font = d2.get_font_default();

    for (_, pos, tint, drawable) in to_draw.iter() {
        if let Some(t) = tint {
            if t.color.a == 0 {
                continue;
            }
        }
        match drawable {
            Drawable::Sprite(sprite) => {
                let Some(tex) = textures.get(&sprite.tex_key) else {
                    continue;
                };
                // Negative source width mirrors the texture horizontally
                let src_w = tex.width as f32;
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: if sprite.flip_h { -src_w } else { src_w },
                    height: tex.height as f32,
                };
                let dest = Rectangle {
                    x: pos.x,
                    y: pos.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                let color = tint.map(|t| t.color).unwrap_or(Color::WHITE);
                d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, color);
            }
            Drawable::Text(text) => {
                let size = text.size();
                let top_left = Vector2 {
                    x: pos.x - size.x * 0.5,
                    y: pos.y - size.y * 0.5,
                };
                let modulate = |c: Color| tint.map(|t| t.multiply(c)).unwrap_or(c);
                if let Some(stroke) = text.stroke {
                    let r = (stroke.thickness * 0.5).ceil().max(1.0);
                    let stroke_color = modulate(stroke.color);
                    for (dx, dy) in STROKE_OFFSETS {
                        let at = Vector2 {
                            x: top_left.x + dx * r,
                            y: top_left.y + dy * r,
                        };
                        d2.draw_text_ex(
                            &font,
                            &text.text,
                            at,
                            text.font_size,
                            text.spacing(),
                            stroke_color,
                        );
                    }
                }
                d2.draw_text_ex(
                    &font,
                    &text.text,
                    top_left,
                    text.font_size,
                    text.spacing(),
                    modulate(text.color),
                );
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        render_debug_world(world, d2);
    }
}

const STROKE_OFFSETS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

fn render_debug_world(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    if let Some(trail) = world.get_resource::<TrailLayout>() {
        d2.draw_rectangle_lines_ex(trail.bounds, 1.0, Color::YELLOW);
        for corner in &trail.corners {
            d2.draw_circle_lines(corner.x as i32, corner.y as i32, 4.0, Color::ORANGE);
        }
    }

    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    for (collider, position) in colliders.iter(world) {
        let (x, y, w, h) = collider.get_aabb(position.pos);
        d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
    }

    let mut positions = world.query::<&MapPosition>();
    for position in positions.iter(world) {
        // Small cross on the pivot
        d2.draw_line(
            position.pos.x as i32 - 5,
            position.pos.y as i32,
            position.pos.x as i32 + 5,
            position.pos.y as i32,
            Color::GREEN,
        );
        d2.draw_line(
            position.pos.x as i32,
            position.pos.y as i32 - 5,
            position.pos.x as i32,
            position.pos.y as i32 + 5,
            Color::GREEN,
        );
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let entity_count = world.iter_entities().count();
    d.draw_text(&format!("Entities: {}", entity_count), 10, 30, 10, Color::WHITE);

    let mut player = world.query_filtered::<&MapPosition, With<CameraTarget>>();
    if let Some(p) = player.iter(world).next() {
        let text = format!("Player: ({:.1}, {:.1})", p.pos.x, p.pos.y);
        d.draw_text(&text, 10, 50, 10, Color::WHITE);
    }

    if let Some(reveal) = world.get_resource::<RevealSequence>() {
        let text = format!("Reveal: {}", reveal.stage.label());
        d.draw_text(&text, 10, 70, 10, Color::WHITE);
    }

    if let Some(cam) = world.get_resource::<Camera2DRes>().map(|c| c.0) {
        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
            cam.target.x, cam.target.y, cam.zoom
        );
        d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::WHITE);
    }
}
