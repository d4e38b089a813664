//! Observer-facing, read-only views of the core's state.

use crate::instruction::Command;
use crate::registers::REGISTER_COUNT;

/// What `Core::get_state` exposes for a single stage latch. `d` is
/// deliberately not included: it is an internal forwarding/ALU scratch
/// slot, not part of the externally observable trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StageObservation {
    pub cmd: Command,
    pub s1: i32,
    pub s2: i32,
}

/// A full read-only snapshot of the core, suitable for copying into an
/// observer-owned buffer.
#[derive(Clone, Copy, Debug)]
pub struct CoreState {
    pub pc: u32,
    pub registers: [i32; REGISTER_COUNT],
    pub if_: StageObservation,
    pub id: StageObservation,
    pub ex: StageObservation,
    pub mem: StageObservation,
    pub wb: StageObservation,
}
