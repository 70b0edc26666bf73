//! Terminal front end: players, game loop and text output.
//!
//! Drives [`GameState`](crate::GameState) purely through its public
//! interface, the way any other UI would.

mod mode;
mod orchestrator;
mod players;
mod render;

pub use mode::GameMode;
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{
    ComputerPlayer, HumanPlayer, InputLines, Player, PlayerAction, parse_action,
    spawn_line_reader, spawn_stdin_reader,
};
pub use render::{print_events, render_board, render_event};
