//! Forwarding unit. Runs during EX, after the ID->EX latch copy and before
//! the ALU, against the previous-cycle snapshot (not the live latches) so
//! that sources are the values produced one cycle ago.

use crate::latch::StageLatch;

/// `forward_from_mem` is the snapshot's EX latch (what is now in MEM);
/// `forward_from_wb` is the snapshot's MEM latch (what is now in WB). WB
/// applies first so MEM — the fresher value — overrides when both match.
pub(crate) fn forward(
    ex: &mut StageLatch,
    forward_from_mem: &StageLatch,
    forward_from_wb: &StageLatch,
) {
    apply(ex, forward_from_wb);
    apply(ex, forward_from_mem);
}

fn apply(ex: &mut StageLatch, source: &StageLatch) {
    if !source.cmd.opcode().writes_register_result() {
        return;
    }

    if source.cmd.dst == ex.cmd.src1 {
        ex.s1 = source.d;
    }
    if !ex.cmd.is_src2_imm && source.cmd.dst == ex.cmd.src2_index() {
        ex.s2 = source.d;
    }
    if ex.cmd.opcode().reads_dst_as_operand() && ex.cmd.dst == source.cmd.dst {
        ex.d = source.d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Command, Opcode, OpcodeSlot};

    fn producer(opcode: Opcode, dst: usize, result: i32) -> StageLatch {
        StageLatch {
            cmd: Command { opcode: OpcodeSlot(opcode), dst, ..Default::default() },
            d: result,
            ..Default::default()
        }
    }

    #[test]
    fn forwards_into_src1() {
        let mem_src = producer(Opcode::Add, 3, 42);
        let wb_src = StageLatch::default();
        let mut ex = StageLatch {
            cmd: Command { src1: 3, ..Default::default() },
            s1: 0,
            ..Default::default()
        };
        forward(&mut ex, &mem_src, &wb_src);
        assert_eq!(ex.s1, 42);
    }

    #[test]
    fn mem_overrides_wb_when_both_match() {
        let wb_src = producer(Opcode::Add, 1, 10);
        let mem_src = producer(Opcode::Add, 1, 20);
        let mut ex = StageLatch {
            cmd: Command { src1: 1, ..Default::default() },
            ..Default::default()
        };
        forward(&mut ex, &mem_src, &wb_src);
        assert_eq!(ex.s1, 20);
    }

    #[test]
    fn branch_reads_dst_as_operand() {
        let mem_src = producer(Opcode::Add, 5, 99);
        let wb_src = StageLatch::default();
        let mut ex = StageLatch {
            cmd: Command { opcode: OpcodeSlot(Opcode::Br), dst: 5, ..Default::default() },
            ..Default::default()
        };
        forward(&mut ex, &mem_src, &wb_src);
        assert_eq!(ex.d, 99);
    }

    #[test]
    fn is_idempotent() {
        let mem_src = producer(Opcode::Load, 2, 7);
        let wb_src = producer(Opcode::Add, 2, 3);
        let mut ex = StageLatch {
            cmd: Command { src1: 2, ..Default::default() },
            ..Default::default()
        };
        forward(&mut ex, &mem_src, &wb_src);
        let once = ex;
        forward(&mut ex, &mem_src, &wb_src);
        assert_eq!(once, ex);
    }
}
