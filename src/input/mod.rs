//! Input handling: raw winit events to semantic actions

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
