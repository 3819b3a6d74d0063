//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the step's execution context and the
//! operand the resolver produced for its addressing mode.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus, Mnemonic};

/// Runs the handler for `mnemonic`.
pub(crate) fn execute<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    mnemonic: Mnemonic,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    use Mnemonic::*;

    match mnemonic {
        ADC => alu::execute_adc(exec, operand),
        AND => alu::execute_and(exec, operand),
        BIT => alu::execute_bit(exec, operand),
        CMP => alu::execute_cmp(exec, operand),
        CPX => alu::execute_cpx(exec, operand),
        CPY => alu::execute_cpy(exec, operand),
        EOR => alu::execute_eor(exec, operand),
        ORA => alu::execute_ora(exec, operand),
        SBC => alu::execute_sbc(exec, operand),

        BCC => branches::execute_bcc(exec, operand),
        BCS => branches::execute_bcs(exec, operand),
        BEQ => branches::execute_beq(exec, operand),
        BMI => branches::execute_bmi(exec, operand),
        BNE => branches::execute_bne(exec, operand),
        BPL => branches::execute_bpl(exec, operand),
        BVC => branches::execute_bvc(exec, operand),
        BVS => branches::execute_bvs(exec, operand),

        ASL => shifts::execute_asl(exec, operand),
        LSR => shifts::execute_lsr(exec, operand),
        ROL => shifts::execute_rol(exec, operand),
        ROR => shifts::execute_ror(exec, operand),

        LDA => load_store::execute_lda(exec, operand),
        LDX => load_store::execute_ldx(exec, operand),
        LDY => load_store::execute_ldy(exec, operand),
        STA => load_store::execute_sta(exec, operand),
        STX => load_store::execute_stx(exec, operand),
        STY => load_store::execute_sty(exec, operand),

        DEC => inc_dec::execute_dec(exec, operand),
        DEX => inc_dec::execute_dex(exec, operand),
        DEY => inc_dec::execute_dey(exec, operand),
        INC => inc_dec::execute_inc(exec, operand),
        INX => inc_dec::execute_inx(exec, operand),
        INY => inc_dec::execute_iny(exec, operand),

        BRK => control::execute_brk(exec, operand),
        JMP => control::execute_jmp(exec, operand),
        JSR => control::execute_jsr(exec, operand),
        NOP => control::execute_nop(exec, operand),
        RTI => control::execute_rti(exec, operand),
        RTS => control::execute_rts(exec, operand),

        PHA => stack::execute_pha(exec, operand),
        PHP => stack::execute_php(exec, operand),
        PLA => stack::execute_pla(exec, operand),
        PLP => stack::execute_plp(exec, operand),

        CLC => flags::execute_clc(exec, operand),
        CLD => flags::execute_cld(exec, operand),
        CLI => flags::execute_cli(exec, operand),
        CLV => flags::execute_clv(exec, operand),
        SEC => flags::execute_sec(exec, operand),
        SED => flags::execute_sed(exec, operand),
        SEI => flags::execute_sei(exec, operand),

        TAX => transfer::execute_tax(exec, operand),
        TAY => transfer::execute_tay(exec, operand),
        TSX => transfer::execute_tsx(exec, operand),
        TXA => transfer::execute_txa(exec, operand),
        TXS => transfer::execute_txs(exec, operand),
        TYA => transfer::execute_tya(exec, operand),
    }
}
