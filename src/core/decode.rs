//! ID: copies the incoming IF latch and resolves operand slots from the
//! register file. No hazard checking here — that happens at EX entry.

use crate::latch::StageLatch;

use super::Core;

pub(crate) fn decode(core: &mut Core) {
    let incoming = core.snapshot.if_;
    let cmd = incoming.cmd;

    let s1 = core.regs.read(cmd.src1);
    let s2 = if cmd.is_src2_imm { cmd.src2 } else { core.regs.read(cmd.src2_index()) };
    let d = core.regs.read(cmd.dst);

    core.latches.id = StageLatch { cmd, pc_of_cmd: incoming.pc_of_cmd, s1, s2, d };
}
