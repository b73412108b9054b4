//! `CfgError`: the CFG boundary cases lowering can hit without it being a
//! structural bug in this crate's own bookkeeping (§7) — as opposed to
//! `panic!`, which [`crate::cfg::Cfg::bb_connect`] uses for contract
//! violations a correct caller never triggers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CfgError {
    /// An `OP_block_end` was reached with no matching `OP_block_start`
    /// still open — the Phase-1 stream handed to lowering is malformed.
    #[error("unbalanced block bracket in Phase-1 IR at instruction {0}")]
    UnbalancedBlock(u32),

    /// A jump or branch instruction named a label that was never
    /// introduced by `OP_label` anywhere in the function being lowered.
    #[error("jump target `{0}` has no matching label in this function")]
    UnknownJumpTarget(String),
}

pub type CfgResult<T> = Result<T, CfgError>;
