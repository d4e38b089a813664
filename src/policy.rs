//! Runtime-adjustable knobs. The core has no configuration files and no
//! CLI surface (see the external interfaces design notes); this is the one
//! `Copy` struct threaded through calls, mirroring the teacher crate's
//! `CPUPolicy`.

/// PC increment per non-branch cycle.
pub const PC_INCREMENT: u32 = 4;

/// Pipeline depth: IF, ID, EX, MEM, WB.
pub const PIPELINE_DEPTH: usize = 5;

#[derive(Clone, Copy, Debug, Default)]
pub struct CorePolicy {
    /// When set, each tick prints a line to stderr describing bubbles,
    /// flushes, stalls and branches as they fire.
    pub verbose: bool,
}
