//! WB: commits register-writing opcodes, then refreshes the ID latch's
//! display slots so that same-cycle writeback visibility shows up in the
//! externally observable state. This refresh is cosmetic: it does not
//! feed back into EX-stage operand values, which come from the snapshot.

use crate::latch::StageLatch;

use super::Core;

pub(crate) fn write_back(core: &mut Core, entering: StageLatch) {
    let cmd = entering.cmd;
    if cmd.opcode().commits_to_register_file() {
        core.regs.write(cmd.dst, entering.d);
    }
    core.latches.wb = entering;

    refresh_id_display(core);
}

fn refresh_id_display(core: &mut Core) {
    let id_cmd = core.latches.id.cmd;
    core.latches.id.s1 = core.regs.read(id_cmd.src1);
    core.latches.id.d = core.regs.read(id_cmd.dst);
    if !id_cmd.is_src2_imm {
        core.latches.id.s2 = core.regs.read(id_cmd.src2_index());
    }
}
