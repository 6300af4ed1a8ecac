use strand::simulation::{DEMO_LENGTH, DEMO_ORIGIN, DEMO_POINTS};
use strand::{RopeError, Simulation, Vec2};
use wasm_bindgen::prelude::*;

fn to_js(err: RopeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    sim: Simulation<f32>,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, count: usize, length: f32) -> Result<RopeDemo, JsValue> {
        let sim = Simulation::hanging(Vec2::new(x, y), count, length).map_err(to_js)?;
        Ok(RopeDemo { sim })
    }

    /// The stock scene: 23 points, 200 long, hung from (250, 100).
    pub fn stock() -> Result<RopeDemo, JsValue> {
        let (x, y) = DEMO_ORIGIN;
        RopeDemo::new(x, y, DEMO_POINTS, DEMO_LENGTH)
    }

    /// Call from `requestAnimationFrame` with its timestamp (milliseconds).
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        self.sim.frame(now_ms)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<usize> {
        self.sim.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sim.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.sim.pointer_up();
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions in chain order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn particle_count(&self) -> usize {
        self.sim.rope().len()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.sim.interaction().bound()
    }
}
