//! # wordvm Opcode Definitions
//!
//! Opcodes occupy the top 5 bits of an instruction word. Values 1-18 are
//! assigned; 0 and 19-31 are unassigned and must be treated as unknown.

use serde::{Deserialize, Serialize};

/// Instruction opcode (5 bits, assigned values 1-18)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// ADD: R[x] = R[y] + R[z]
    Add = 1,
    /// SUB: R[x] = R[y] - R[z]
    Sub = 2,
    /// MUL: R[x] = R[y] * R[z]
    Mul = 3,
    /// DIV: R[x] = R[y] / R[z]
    Div = 4,
    /// MOD: R[x] = R[y] % R[z]
    Mod = 5,
    /// AND: R[x] = R[y] & R[z]
    And = 6,
    /// OR: R[x] = R[y] | R[z]
    Or = 7,
    /// NOT: R[x] = logical negation of R[y] (0 or 1, not a bitwise complement)
    Not = 8,
    /// CONST: R[x] = zero-extended 22-bit immediate
    Const = 9,
    /// SLL: R[x] = R[y] << shamt (shift amount carried in the z field)
    Sll = 10,
    /// LOAD: R[x] = Memory[R[y]]
    Load = 11,
    /// STORE: Memory[R[y]] = R[x]
    Store = 12,
    /// GOTO: PC = R[x]
    Goto = 13,
    /// IFEQ: PC = R[x] if R[y] == R[z], else PC+1
    Ifeq = 14,
    /// IFLT: PC = R[x] if R[y] < R[z] (signed), else PC+1
    Iflt = 15,
    /// HALT: PC = -1
    Halt = 16,
    /// IN: R[x] = next value from the input port
    In = 17,
    /// OUT: write the low 8 bits of R[x] to the output port
    Out = 18,
}

impl Opcode {
    /// Opcode field width in bits
    pub const BITS: u32 = 5;

    /// Try to convert from a 5-bit field value
    pub fn from_u5(value: u32) -> Option<Self> {
        match value {
            1 => Some(Opcode::Add),
            2 => Some(Opcode::Sub),
            3 => Some(Opcode::Mul),
            4 => Some(Opcode::Div),
            5 => Some(Opcode::Mod),
            6 => Some(Opcode::And),
            7 => Some(Opcode::Or),
            8 => Some(Opcode::Not),
            9 => Some(Opcode::Const),
            10 => Some(Opcode::Sll),
            11 => Some(Opcode::Load),
            12 => Some(Opcode::Store),
            13 => Some(Opcode::Goto),
            14 => Some(Opcode::Ifeq),
            15 => Some(Opcode::Iflt),
            16 => Some(Opcode::Halt),
            17 => Some(Opcode::In),
            18 => Some(Opcode::Out),
            _ => None,
        }
    }

    /// Numeric opcode value
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Assembly mnemonic (lowercase, case-sensitive)
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Mod => "mod",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Not => "not",
            Opcode::Const => "const",
            Opcode::Sll => "sll",
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::Goto => "goto",
            Opcode::Ifeq => "ifeq",
            Opcode::Iflt => "iflt",
            Opcode::Halt => "halt",
            Opcode::In => "in",
            Opcode::Out => "out",
        }
    }

    /// Look up an opcode by its exact mnemonic (no case folding)
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        match text {
            "add" => Some(Opcode::Add),
            "sub" => Some(Opcode::Sub),
            "mul" => Some(Opcode::Mul),
            "div" => Some(Opcode::Div),
            "mod" => Some(Opcode::Mod),
            "and" => Some(Opcode::And),
            "or" => Some(Opcode::Or),
            "not" => Some(Opcode::Not),
            "const" => Some(Opcode::Const),
            "sll" => Some(Opcode::Sll),
            "load" => Some(Opcode::Load),
            "store" => Some(Opcode::Store),
            "goto" => Some(Opcode::Goto),
            "ifeq" => Some(Opcode::Ifeq),
            "iflt" => Some(Opcode::Iflt),
            "halt" => Some(Opcode::Halt),
            "in" => Some(Opcode::In),
            "out" => Some(Opcode::Out),
            _ => None,
        }
    }

    /// Number of operands the assembly form takes
    pub const fn arity(self) -> usize {
        match self {
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::And
            | Opcode::Or
            | Opcode::Sll
            | Opcode::Ifeq
            | Opcode::Iflt => 3,
            Opcode::Not | Opcode::Const | Opcode::Load | Opcode::Store => 2,
            Opcode::Goto | Opcode::In | Opcode::Out => 1,
            Opcode::Halt => 0,
        }
    }

    /// Whether this opcode uses the Const shape (22-bit immediate)
    #[inline]
    pub const fn uses_const_shape(self) -> bool {
        matches!(self, Opcode::Const)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
