//! Instruction record: the data the core's stages operate on.
//!
//! The crate does not parse a binary encoding for instructions (that belongs
//! to the host's instruction memory). It does, however, define the closed
//! opcode enumeration and the plain record struct every stage reads, plus a
//! small adapter (`Opcode::try_from`, [`RawCommand`]) for hosts that store
//! instructions as raw numeric codes and want the core to validate them.

use crate::error::CoreError;

/// The source ISA's non-standard convention: `dst` is always a register
/// index, but for Br/Breq/Brneq it is not a *destination* — it names the
/// register holding the PC-relative branch offset (read the same way a
/// Store reads it as the base value to write). Preserved bit-for-bit rather
/// than redesigned, since regression traces depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Add,
    Sub,
    Load,
    Store,
    Br,
    Breq,
    Brneq,
}

impl Opcode {
    /// Opcodes that produce a register result (forwarding sources).
    pub fn writes_register_result(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Load)
    }

    /// Opcodes that read `dst` as an operand rather than a destination.
    pub fn reads_dst_as_operand(self) -> bool {
        matches!(self, Opcode::Br | Opcode::Breq | Opcode::Brneq | Opcode::Store)
    }

    /// Opcodes that commit a result to the register file in Writeback.
    pub fn commits_to_register_file(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Load)
    }

    /// Opcodes that may resolve a taken branch in Memory.
    pub fn is_branch(self) -> bool {
        matches!(self, Opcode::Br | Opcode::Breq | Opcode::Brneq)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = CoreError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Opcode::Nop,
            1 => Opcode::Add,
            2 => Opcode::Sub,
            3 => Opcode::Load,
            4 => Opcode::Store,
            5 => Opcode::Br,
            6 => Opcode::Breq,
            7 => Opcode::Brneq,
            _ => {
                return Err(CoreError::UnknownOpcode {
                    stage: crate::error::Stage::Fetch,
                })
            }
        })
    }
}

/// An instruction record as carried through the pipeline.
///
/// `src2` is dual-purpose: a register index when `is_src2_imm` is false, or
/// a sign-carrying immediate value otherwise. `dst`, `src1` and `src2` are
/// all register indices into the same 0..REGISTER_COUNT space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Command {
    pub opcode: OpcodeSlot,
    pub dst: usize,
    pub src1: usize,
    pub src2: i32,
    pub is_src2_imm: bool,
}

impl Command {
    pub const NOP: Command = Command {
        opcode: OpcodeSlot(Opcode::Nop),
        dst: 0,
        src1: 0,
        src2: 0,
        is_src2_imm: false,
    };

    pub fn opcode(&self) -> Opcode {
        self.opcode.0
    }

    /// `src2` read as a register index; only meaningful when
    /// `is_src2_imm` is false.
    pub fn src2_index(&self) -> usize {
        self.src2 as usize
    }
}

/// Newtype so `Command` can derive `Default` without `Opcode` doing so
/// (there is no "default opcode" other than Nop, and this keeps that
/// choice visible at the type rather than buried in a derive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeSlot(pub Opcode);

impl Default for OpcodeSlot {
    fn default() -> Self {
        OpcodeSlot(Opcode::Nop)
    }
}

/// Raw, host-facing instruction representation for backends that store
/// instructions as numeric codes rather than constructing [`Command`]
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RawCommand {
    pub opcode: u8,
    pub dst: usize,
    pub src1: usize,
    pub src2: i32,
    pub is_src2_imm: bool,
}

impl TryFrom<RawCommand> for Command {
    type Error = CoreError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        Ok(Command {
            opcode: OpcodeSlot(Opcode::try_from(raw.opcode)?),
            dst: raw.dst,
            src1: raw.src1,
            src2: raw.src2,
            is_src2_imm: raw.is_src2_imm,
        })
    }
}
