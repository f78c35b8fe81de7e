//! Text-to-motion playback: instruction vocabulary, compiler, run state,
//! and the per-frame scheduler.

mod compiler;
mod instruction;
pub mod scheduler;
mod state;

pub use compiler::compile;
pub use instruction::{Axis, Channel, Direction, InstructionGroup, JointOp};
pub use scheduler::{step, StepOutcome};
pub use state::RunState;
