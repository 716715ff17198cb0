//! Maze Pulse library crate: the maze rules, the board contracts and the
//! terminal board.

pub mod config;
pub mod device;
pub mod domain;
pub mod error;
pub mod sim;
pub mod ui;
