//! Off-chain counterpart of the revenue-share covenant.
//!
//! A coin locked under the covenant may only be spent into one exact list of
//! outputs. [`compute_outputs`] derives that list, and [`serialize_outpoints`]
//! and [`serialize_outputs`] render the byte strings the covenant hashes when
//! it checks the spending transaction.

use {
  bitcoin::{
    Amount, OutPoint, PubkeyHash, Script, ScriptBuf, ScriptHash, TxOut,
    consensus::Encodable,
    hashes::{Hash, sha256d},
    opcodes, script,
  },
  derive_more::Display,
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  std::{
    collections::BTreeMap,
    fmt::{self, Formatter},
    iter,
    str::FromStr,
  },
};

pub use {
  address::{AddressType, CashAddress, Prefix},
  contract::{Contract, Distribution, Generation, Settlement, Spend},
  distributor::{Branch, compute_outputs},
  error::Error,
  party::Party,
  quotient::quotient,
  serialize::{hash_outputs, hash_prevouts, serialize_outpoints, serialize_outputs},
};

/// Outputs below this value are never created.
pub const DUST_THRESHOLD: Amount = Amount::from_sat(546);

/// Largest operand the covenant's 32-bit signed script arithmetic accepts.
pub const MAX_SCRIPT_INT: u64 = 0x7fff_ffff;

/// Party shares are expressed in thousandths of the output value.
pub const SHARE_TOTAL: u64 = 1000;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

pub mod address;
mod contract;
mod distributor;
mod error;
mod party;
mod quotient;
mod serialize;
