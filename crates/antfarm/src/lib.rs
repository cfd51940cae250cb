pub use farm::{Farm, FarmBuilder, FarmError, Room, RoomId};
pub use parser::{parse, ParseError};
pub use routing::types::{AntAssignment, Move, Path, Plan, RouteError, Schedule};
pub use routing::plan;

pub mod farm;
pub mod parser;
pub mod routing;
