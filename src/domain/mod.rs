pub mod colour;
pub mod heading;
pub mod maze;
pub mod perception;
pub mod tile;
