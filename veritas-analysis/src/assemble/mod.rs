//! Result assembly: scores + validity + content tables → the
//! candidate-facing `AssessmentResult`.

mod assembler;
mod interpretation;

pub use assembler::ResultAssembler;
pub use interpretation::InterpretationTable;
