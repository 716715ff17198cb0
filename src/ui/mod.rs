pub mod gamepad;
pub mod input;
pub mod intro;
pub mod renderer;
pub mod sound;
