//! MEM: data read/write and branch resolution.

use crate::instruction::Opcode;
use crate::latch::StageLatch;
use crate::memory::{DataMemory, DataReadOutcome};
use crate::policy::PC_INCREMENT;

use super::Core;

/// Runs Memory on `entering` (the snapshot's EX latch in the ordinary
/// path, or a retried EX latch when recovering from `mem_wait`) and
/// returns the resulting MEM latch. Branch resolution and `mem_wait`
/// are written directly onto `core`.
pub(crate) fn memory_access(
    core: &mut Core,
    entering: StageLatch,
    data_mem: &mut impl DataMemory,
) -> StageLatch {
    let mut mem = entering;
    let cmd = mem.cmd;

    match cmd.opcode() {
        Opcode::Nop | Opcode::Add | Opcode::Sub => {}
        Opcode::Br => resolve_branch(core, &mem),
        Opcode::Breq => {
            if mem.s1 == mem.s2 {
                resolve_branch(core, &mem);
            }
        }
        Opcode::Brneq => {
            if mem.s1 != mem.s2 {
                resolve_branch(core, &mem);
            }
        }
        Opcode::Load => match data_mem.read(mem.d as u32) {
            DataReadOutcome::Ready(value) => mem.d = value,
            DataReadOutcome::Wait => {
                core.mem_wait = true;
                if core.policy.verbose {
                    eprintln!("[pipecore] memory wait asserted, retrying load next cycle");
                }
            }
        },
        Opcode::Store => {
            let address = (mem.d.wrapping_add(mem.s2)) as u32;
            data_mem.write(address, mem.s1);
        }
    }

    mem
}

fn resolve_branch(core: &mut Core, mem: &StageLatch) {
    core.branch_taken = true;
    core.branch_target = (mem.d as u32).wrapping_add(mem.pc_of_cmd).wrapping_add(PC_INCREMENT);
    if core.policy.verbose {
        eprintln!("[pipecore] branch resolved taken, target {:#010x}", core.branch_target);
    }
}
