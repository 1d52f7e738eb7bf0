//! Bitcoin script primitives
//!
//! Only script *decompilation* is supported: splitting a byte sequence into
//! opcode and push-data instructions. Nothing here evaluates a script.
//!
//! Both the inscription envelope parser and the Runestone decoder sit on top
//! of these two readers:
//! - [`read_push_data`] decodes one push instruction at an arbitrary cursor
//! - [`decompile`] walks a whole scriptPubKey lazily as [`Instruction`]s

pub mod instruction;
pub mod push_data;

pub use instruction::{decompile, DecompileError, Instruction, Instructions};
pub use push_data::{read_complete_push_data, read_push_data, write_push_data, PushDataError};

/// Opcode byte values used by the decoders
pub mod opcodes {
    /// Empty push, also the inscription body marker
    pub const OP_0: u8 = 0x00;
    /// Largest direct push (`OP_PUSHBYTES_75`)
    pub const OP_PUSHBYTES_75: u8 = 0x4b;
    pub const OP_PUSHDATA1: u8 = 0x4c;
    pub const OP_PUSHDATA2: u8 = 0x4d;
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Runes protocol identifier
    pub const OP_PUSHNUM_13: u8 = 0x5d;
    pub const OP_IF: u8 = 0x63;
    pub const OP_ENDIF: u8 = 0x68;
    pub const OP_RETURN: u8 = 0x6a;
}
