//! Events emitted while handling a command or a tick.
//! The feedback layer consumes these for sound and animation.

use crate::domain::heading::Heading;
use crate::domain::maze::Cell;
use crate::sim::session::ViewMode;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    Turned { heading: Heading },
    Stepped { cell: Cell },
    /// A forward step hit a blocking wall. Nothing moved.
    Bumped,
    /// A twister tile spun the player around.
    Redirected { from: Heading, to: Heading },
    ViewChanged { view: ViewMode },
    Won,
    Died,
}
