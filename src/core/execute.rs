//! EX: copies the ID->EX latch, runs hazard detection and forwarding
//! against the previous-cycle snapshot, then performs the ALU operation.

use crate::instruction::Opcode;

use super::forward::forward;
use super::hazard::load_use_hazard;
use super::Core;

pub(crate) fn execute(core: &mut Core) {
    // `entering` is the instruction about to occupy EX this cycle; the
    // hazard check compares it against the instruction just decoded into
    // the live ID latch this same cycle.
    let entering = core.snapshot.id;

    if load_use_hazard(&entering, &core.latches.id) {
        core.stall = true;
        if core.policy.verbose {
            eprintln!("[pipecore] load-use hazard detected, stalling");
        }
    }

    let mut ex = entering;
    forward(&mut ex, &core.snapshot.ex, &core.snapshot.mem);

    ex.d = match ex.cmd.opcode() {
        Opcode::Nop | Opcode::Store | Opcode::Br | Opcode::Breq | Opcode::Brneq => ex.d,
        Opcode::Add => ex.s1.wrapping_add(ex.s2),
        Opcode::Sub => ex.s1.wrapping_sub(ex.s2),
        Opcode::Load => ex.s1.wrapping_add(ex.s2),
    };

    core.latches.ex = ex;
}
