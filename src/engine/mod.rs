// Engine modules: frame timing, physics, rendering

pub mod game_loop;
pub mod physics;
pub mod renderer;
