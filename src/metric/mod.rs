mod delta;

pub use delta::{delta, single_delta, TurnoutDelta};
