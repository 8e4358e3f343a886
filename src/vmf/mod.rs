//! Parsing of the [Valve Map Format](https://developer.valvesoftware.com/wiki/VMF_(Valve_Map_Format))
//! block grammar into a tree of [`Block`]s.
//!
//! The parser is purely structural: every block is kept with its string
//! properties, and meaning is only assigned later (see [`crate::import`]).

pub mod block;
pub mod parser;

pub use block::{Block, BlockKind};
pub use parser::{Parser, parse_blocks};
