//! The per-cycle pipeline advance engine.

mod decode;
mod execute;
mod fetch;
mod forward;
mod hazard;
mod mem_stage;
mod writeback;

use crate::error::CoreResult;
use crate::latch::{PipelineLatches, StageLatch};
use crate::memory::{DataMemory, InstructionMemory};
use crate::policy::CorePolicy;
use crate::registers::RegisterFile;
use crate::state::{CoreState, StageObservation};

/// Owns the register file, the five live stage latches, the
/// previous-cycle snapshot, and the hazard/control flags. All pipeline
/// behavior is reached through [`Core::reset`] and [`Core::clock_tick`].
pub struct Core {
    pub(crate) regs: RegisterFile,
    pub(crate) pc: u32,
    pub(crate) latches: PipelineLatches,
    pub(crate) snapshot: PipelineLatches,

    pub(crate) stall: bool,
    pub(crate) branch_taken: bool,
    pub(crate) branch_target: u32,
    pub(crate) mem_wait: bool,
    pub(crate) after_reset: bool,

    pub policy: CorePolicy,
}

impl Default for Core {
    fn default() -> Self {
        Self::new(CorePolicy::default())
    }
}

impl Core {
    pub fn new(policy: CorePolicy) -> Self {
        Self {
            regs: RegisterFile::default(),
            pc: 0,
            latches: PipelineLatches::default(),
            snapshot: PipelineLatches::default(),
            stall: false,
            branch_taken: false,
            branch_target: 0,
            mem_wait: false,
            after_reset: false,
            policy,
        }
    }

    /// Zeros the register file, sets PC to 0, initializes all latches to
    /// NOP, marks `after_reset`, and performs an initial Fetch at PC=0
    /// into IF.
    pub fn reset(&mut self, inst_mem: &mut impl InstructionMemory) {
        self.regs.reset();
        self.pc = 0;
        self.latches = PipelineLatches::default();
        self.snapshot = PipelineLatches::default();
        self.stall = false;
        self.branch_taken = false;
        self.branch_target = 0;
        self.mem_wait = false;
        self.after_reset = true;

        let cmd = inst_mem.read(self.pc);
        self.latches.if_ = StageLatch { cmd, pc_of_cmd: self.pc, s1: 0, s2: 0, d: 0 };
    }

    /// Advances one cycle. Precedence: memory-wait freeze, then stall
    /// handling, then the back half (MEM, WB), then the front half (IF,
    /// ID, EX) driven off the previous cycle's snapshot.
    pub fn clock_tick(
        &mut self,
        inst_mem: &mut impl InstructionMemory,
        data_mem: &mut impl DataMemory,
    ) -> CoreResult<()> {
        if self.policy.verbose {
            eprintln!("[pipecore] tick; pc={:#010x}", self.pc);
        }

        if self.mem_wait {
            self.mem_wait = false;
            // Both re-runs use the snapshot taken when the wait was first
            // asserted: step 2 (the snapshot refresh) never ran while the
            // front half was frozen, so it is still the right input.
            let snapshot_mem = self.snapshot.mem;
            let snapshot_ex = self.snapshot.ex;
            writeback::write_back(self, snapshot_mem);
            self.latches.mem = mem_stage::memory_access(self, snapshot_ex, data_mem);
            self.latches.wb.flush();
            return Ok(());
        }

        self.snapshot = self.latches;

        if self.stall && !self.branch_taken {
            self.latches.ex.flush();
            self.stall = false;
            if self.policy.verbose {
                eprintln!("[pipecore] stall consumed, EX bubbled");
            }
        } else {
            if self.stall && self.branch_taken {
                self.stall = false;
            }
            if self.after_reset {
                self.after_reset = false;
            } else {
                fetch::fetch(self, inst_mem);
                decode::decode(self);
                execute::execute(self);
            }
        }

        let snapshot_ex = self.snapshot.ex;
        let snapshot_mem = self.snapshot.mem;
        self.latches.mem = mem_stage::memory_access(self, snapshot_ex, data_mem);
        writeback::write_back(self, snapshot_mem);

        Ok(())
    }

    /// A read-only snapshot of PC, the register file, and each stage's
    /// `cmd`/`s1`/`s2`. `d` is not externally visible.
    pub fn get_state(&self) -> CoreState {
        let observe = |latch: StageLatch| StageObservation {
            cmd: latch.cmd,
            s1: latch.s1,
            s2: latch.s2,
        };

        CoreState {
            pc: self.pc,
            registers: self.regs.snapshot(),
            if_: observe(self.latches.if_),
            id: observe(self.latches.id),
            ex: observe(self.latches.ex),
            mem: observe(self.latches.mem),
            wb: observe(self.latches.wb),
        }
    }
}
