//! Load-use hazard detector. Runs at EX-stage entry, comparing the
//! instruction about to enter EX (sourced from the previous-cycle
//! snapshot) against the instruction just decoded into ID this cycle.

use crate::instruction::Opcode;
use crate::latch::StageLatch;

pub(crate) fn load_use_hazard(entering_ex: &StageLatch, new_id: &StageLatch) -> bool {
    if entering_ex.cmd.opcode() != Opcode::Load {
        return false;
    }

    let dst = entering_ex.cmd.dst;
    let hits_src1 = dst == new_id.cmd.src1;
    let hits_src2 = !new_id.cmd.is_src2_imm && dst == new_id.cmd.src2_index();

    hits_src1 || hits_src2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Command;

    fn load(dst: usize) -> StageLatch {
        StageLatch {
            cmd: Command { opcode: crate::instruction::OpcodeSlot(Opcode::Load), dst, ..Default::default() },
            ..Default::default()
        }
    }

    fn consumer(src1: usize, src2: i32, is_src2_imm: bool) -> StageLatch {
        StageLatch {
            cmd: Command { src1, src2, is_src2_imm, ..Default::default() },
            ..Default::default()
        }
    }

    #[test]
    fn flags_src1_dependency() {
        assert!(load_use_hazard(&load(1), &consumer(1, 0, true)));
    }

    #[test]
    fn flags_src2_dependency_when_register() {
        assert!(load_use_hazard(&load(2), &consumer(0, 2, false)));
    }

    #[test]
    fn ignores_src2_dependency_when_immediate() {
        assert!(!load_use_hazard(&load(2), &consumer(0, 2, true)));
    }

    #[test]
    fn non_load_never_hazards() {
        let add = StageLatch { cmd: Command { dst: 1, ..Default::default() }, ..Default::default() };
        assert!(!load_use_hazard(&add, &consumer(1, 0, true)));
    }
}
