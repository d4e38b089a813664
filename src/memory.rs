//! External memory collaborators.
//!
//! Instruction and data memory are deliberately not implemented here: the
//! core only defines the contract it needs from them. `mem_clock_tick` has
//! no counterpart in either trait — the host drives that alongside
//! [`crate::Core::clock_tick`], outside the core's control.

/// Synchronous instruction-memory back-end. Reads are assumed single-cycle
/// and always succeed.
pub trait InstructionMemory {
    fn read(&mut self, pc: u32) -> crate::instruction::Command;
}

/// Outcome of a data-memory read: either the word is ready, or the memory
/// signals back-pressure and the core must retry next cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataReadOutcome {
    Ready(i32),
    Wait,
}

/// Synchronous data-memory back-end.
pub trait DataMemory {
    fn read(&mut self, address: u32) -> DataReadOutcome;
    /// Fire-and-forget from the core's perspective.
    fn write(&mut self, address: u32, value: i32);
}
