//! Main disassembler logic

use crate::decoder::decode;
use crate::error::Result;
use crate::formatter::format;
use wordvm_spec::Program;

/// Disassemble a program into an assembly listing.
///
/// Addresses and raw words ride in trailing `//` comments, so the listing
/// can be fed straight back into the assembler.
pub fn disassemble(program: &Program) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "// wordvm disassembly, {} instruction(s)\n\n",
        program.len()
    ));

    for (addr, &word) in program.words().iter().enumerate() {
        let instr = decode(word)?;
        let text = format(&instr);
        output.push_str(&format!("{text:<24}// {addr:5}: {word:#010x}\n"));
    }

    Ok(output)
}
