//! Minimal demonstration binary: builds a tiny in-memory program, runs it
//! to completion against array-backed instruction/data memories, and
//! prints a cycle trace. Not a general-purpose driver; real hosts supply
//! their own `InstructionMemory`/`DataMemory` and own the clock loop.

use pipecore::{
    Command, Core, CorePolicy, DataMemory, DataReadOutcome, InstructionMemory, Opcode, OpcodeSlot,
};

struct ArrayInstructionMemory {
    program: Vec<Command>,
}

impl InstructionMemory for ArrayInstructionMemory {
    fn read(&mut self, pc: u32) -> Command {
        let index = (pc / 4) as usize;
        self.program.get(index).copied().unwrap_or(Command::NOP)
    }
}

struct ArrayDataMemory {
    words: [i32; 256],
}

impl Default for ArrayDataMemory {
    fn default() -> Self {
        ArrayDataMemory { words: [0; 256] }
    }
}

impl DataMemory for ArrayDataMemory {
    fn read(&mut self, address: u32) -> DataReadOutcome {
        DataReadOutcome::Ready(self.words[(address / 4) as usize])
    }

    fn write(&mut self, address: u32, value: i32) {
        self.words[(address / 4) as usize] = value;
    }
}

fn main() {
    // r1 = 10; r2 = 32; r1 = r1 + r2; store r1 at address 0; NOP; NOP.
    let program = vec![
        Command { opcode: OpcodeSlot(Opcode::Add), dst: 1, src1: 0, src2: 10, is_src2_imm: true },
        Command { opcode: OpcodeSlot(Opcode::Add), dst: 2, src1: 0, src2: 32, is_src2_imm: true },
        Command { opcode: OpcodeSlot(Opcode::Add), dst: 1, src1: 1, src2: 2, is_src2_imm: false },
        Command { opcode: OpcodeSlot(Opcode::Store), dst: 0, src1: 1, src2: 0, is_src2_imm: true },
        Command::NOP,
        Command::NOP,
        Command::NOP,
    ];

    let mut inst_mem = ArrayInstructionMemory { program };
    let mut data_mem = ArrayDataMemory::default();
    let mut core = Core::new(CorePolicy { verbose: true });
    core.reset(&mut inst_mem);

    for cycle in 0..10 {
        core.clock_tick(&mut inst_mem, &mut data_mem).expect("no unknown opcodes in this program");
        let state = core.get_state();
        eprintln!(
            "cycle {cycle}: pc={:#06x} wb={:?} r1={} r2={}",
            state.pc,
            state.wb.cmd.opcode(),
            state.registers[1],
            state.registers[2],
        );
    }

    println!("r1 = {}", data_mem.words[0]);
}
