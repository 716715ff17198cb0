pub mod command;
pub mod effect;
pub mod event;
pub mod feedback;
pub mod outcome;
pub mod overlay;
pub mod pulse;
pub mod session;
pub mod view;
