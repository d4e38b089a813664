//! Stage latch: the snapshot carried between pipeline stages.

use crate::instruction::Command;

/// One pipeline register's worth of state. Every stage (IF, ID, EX, MEM,
/// WB) uses this same shape; the interpretation of `s1`/`s2`/`d` is
/// stage-dependent (see the data model in the crate's design notes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StageLatch {
    /// The instruction occupying this stage; NOP after a flush.
    pub cmd: Command,
    /// PC at which `cmd` was fetched.
    pub pc_of_cmd: u32,
    pub s1: i32,
    pub s2: i32,
    pub d: i32,
}

impl StageLatch {
    /// Resets this latch to NOP with zero operand slots.
    pub fn flush(&mut self) {
        *self = StageLatch::default();
    }
}

/// The five live latches plus the previous-cycle snapshot the forwarding
/// unit and the front-half stages read from.
#[derive(Clone, Copy, Default)]
pub struct PipelineLatches {
    pub if_: StageLatch,
    pub id: StageLatch,
    pub ex: StageLatch,
    pub mem: StageLatch,
    pub wb: StageLatch,
}

impl PipelineLatches {
    pub fn flush_front(&mut self) {
        self.if_.flush();
        self.id.flush();
        self.ex.flush();
    }
}
