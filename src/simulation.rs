//! Fixed-step simulation loop and frame hooks
//!
//! The simulation advances the physics world one fixed timestep per frame
//! and keeps a small display mirror of the ball for rendering. Rendering
//! reads state only; it never mutates the world.

use ricochet_math::Vec2;
use ricochet_physics::{BodyKey, StaticShape, World};
use ricochet_render::{Canvas, Color};

use crate::scene::{Scene, BALL_RADIUS};

/// Impulse-as-velocity-change subtracted from the ball on pointer press
pub const POINTER_IMPULSE: Vec2 = Vec2::new(50.0, 200.0);

/// Segment count used when tessellating the ball
const BALL_SEGMENTS: u32 = 20;

const LINE_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
const LINE_WIDTH: f32 = 2.0;
const POLYGON_COLOR: Color = [0.5, 0.5, 1.0, 1.0];
const BALL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];

/// Pointer input, already decoupled from any windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Pressed,
    Released,
}

/// Render-facing snapshot of the simulation, refreshed each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub ball_position: Vec2,
}

/// Per-frame hooks the windowing layer drives
pub trait FrameHooks {
    /// Advance the simulation by `dt` seconds
    fn tick(&mut self, dt: f32);
    /// Emit the current frame's geometry; must not mutate simulation state
    fn render(&self, canvas: &mut Canvas);
    /// React to pointer input
    fn on_pointer_event(&mut self, event: PointerEvent);
}

/// Owns the world and drives it with a fixed timestep
pub struct SimulationLoop {
    world: World,
    ball: BodyKey,
    display: DisplayState,
}

impl SimulationLoop {
    pub fn new(scene: Scene) -> Self {
        let ball_position = scene
            .world
            .body(scene.ball)
            .map(|b| b.position)
            .unwrap_or(Vec2::ZERO);
        Self {
            world: scene.world,
            ball: scene.ball,
            display: DisplayState { ball_position },
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Ball velocity, for tests and diagnostics
    pub fn ball_velocity(&self) -> Option<Vec2> {
        self.world.body(self.ball).map(|b| b.velocity)
    }
}

impl FrameHooks for SimulationLoop {
    fn tick(&mut self, dt: f32) {
        self.world.step(dt);
        if let Some(body) = self.world.body(self.ball) {
            self.display.ball_position = body.position;
        }
    }

    fn render(&self, canvas: &mut Canvas) {
        for shape in self.world.static_shapes() {
            match shape {
                StaticShape::Segment { segment, .. } => {
                    canvas.stroke_line(segment.a, segment.b, LINE_WIDTH, LINE_COLOR, LINE_COLOR);
                }
                StaticShape::Polygon { polygon, .. } => {
                    let verts = polygon.verts();
                    if verts.len() == 4 {
                        canvas.fill_quad(
                            [verts[0], verts[1], verts[2], verts[3]],
                            [POLYGON_COLOR; 4],
                        );
                    } else {
                        canvas.fill_convex_polygon(verts, POLYGON_COLOR);
                    }
                }
            }
        }
        canvas.fill_circle(
            self.display.ball_position,
            BALL_RADIUS,
            BALL_SEGMENTS,
            BALL_COLOR,
        );
    }

    fn on_pointer_event(&mut self, event: PointerEvent) {
        if event == PointerEvent::Pressed {
            if let Some(body) = self.world.body_mut(self.ball) {
                body.velocity -= POINTER_IMPULSE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::demo_scene;

    fn demo_sim() -> SimulationLoop {
        SimulationLoop::new(demo_scene(Vec2::new(0.0, 300.0)))
    }

    #[test]
    fn test_tick_advances_ball() {
        let mut sim = demo_sim();
        let start = sim.display().ball_position;
        sim.tick(1.0 / 60.0);
        assert!(sim.display().ball_position.y > start.y);
    }

    #[test]
    fn test_display_mirrors_body() {
        let mut sim = demo_sim();
        sim.tick(1.0 / 60.0);
        let body_pos = sim.world().body(sim.ball).unwrap().position;
        assert_eq!(sim.display().ball_position, body_pos);
    }

    #[test]
    fn test_pointer_press_kicks_ball() {
        let mut sim = demo_sim();
        let before = sim.ball_velocity().unwrap();
        sim.on_pointer_event(PointerEvent::Pressed);
        let after = sim.ball_velocity().unwrap();
        assert_eq!(after, before - POINTER_IMPULSE);
    }

    #[test]
    fn test_pointer_release_is_ignored() {
        let mut sim = demo_sim();
        let before = sim.ball_velocity().unwrap();
        sim.on_pointer_event(PointerEvent::Released);
        assert_eq!(sim.ball_velocity().unwrap(), before);
    }

    #[test]
    fn test_render_emits_all_shapes() {
        let sim = demo_sim();
        let mut canvas = Canvas::new();
        sim.render(&mut canvas);
        // Line quad (6) + polygon quad (6) + ball fan (20 * 3)
        assert_eq!(canvas.vertex_count(), 6 + 6 + 60);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let sim = demo_sim();
        let mut first = Canvas::new();
        let mut second = Canvas::new();
        sim.render(&mut first);
        sim.render(&mut second);
        assert_eq!(first.vertices(), second.vertices());
    }
}
