//! Per-frame vertex list assembly
//!
//! Pure read-only pass over the post-tick [`GameState`]; no gameplay logic
//! and no mutation.

use glam::Vec2;

use super::shapes::{gradient_quad, quad, rounded_rect, star_polygon};
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Paddle corner rounding in pixels
const PADDLE_CORNER_RADIUS: f32 = 8.0;

/// Build the vertex list for the current frame
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let field = Vec2::new(state.playfield.width, state.playfield.height);
    let mut vertices = Vec::new();

    match state.phase {
        GamePhase::Title | GamePhase::GameOver => {
            // Flat backdrop; the HUD collaborator owns the text
            vertices.extend(quad(Vec2::ZERO, field, colors::TITLE_BACKDROP));
        }
        GamePhase::Playing | GamePhase::Paused => {
            if settings.high_contrast {
                vertices.extend(quad(Vec2::ZERO, field, colors::BACKGROUND_TOP));
            } else {
                vertices.extend(gradient_quad(
                    Vec2::ZERO,
                    field,
                    colors::BACKGROUND_TOP,
                    colors::BACKGROUND_BOTTOM,
                ));
            }

            for star in &state.stars {
                vertices.extend(star_polygon(star.pos, star.size, colors::STAR));
            }

            let player = &state.player;
            vertices.extend(rounded_rect(
                player.pos,
                Vec2::new(player.w, player.h),
                PADDLE_CORNER_RADIUS,
                colors::PADDLE_BODY,
            ));
            vertices.extend(quad(
                player.pos + Vec2::new(8.0, 3.0),
                Vec2::new(player.w - 16.0, 6.0),
                colors::PADDLE_STRIPE,
            ));

            if state.phase == GamePhase::Paused && !settings.reduced_motion {
                vertices.extend(quad(Vec2::ZERO, field, colors::PAUSE_OVERLAY));
            }
        }
    }

    vertices
}
