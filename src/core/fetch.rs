//! IF: computes the next PC and reads the instruction there into the IF
//! latch. Instruction memory reads are assumed single-cycle.

use crate::latch::StageLatch;
use crate::memory::InstructionMemory;
use crate::policy::PC_INCREMENT;

use super::Core;

pub(crate) fn fetch(core: &mut Core, inst_mem: &mut impl InstructionMemory) {
    if core.branch_taken {
        // Branch resolved in MEM last cycle: flush IF/ID/EX and the
        // snapshot entries behind them, then redirect PC.
        core.latches.flush_front();
        core.snapshot.if_.flush();
        core.snapshot.id.flush();
        core.snapshot.ex.flush();
        core.pc = core.branch_target;
        core.branch_taken = false;

        if core.policy.verbose {
            eprintln!(
                "[pipecore] branch taken, redirecting to {:#010x}",
                core.pc
            );
        }
    } else {
        core.pc += PC_INCREMENT;
    }

    let pc = core.pc;
    let cmd = inst_mem.read(pc);

    core.latches.if_ = StageLatch { cmd, pc_of_cmd: pc, s1: 0, s2: 0, d: 0 };
}
