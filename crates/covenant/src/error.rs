use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("invalid address `{address}`: {source}")]
  Address {
    address: String,
    source: address::Error,
  },
  #[error("fee of {} sats exceeds input value of {} sats", .fee.to_sat(), .value.to_sat())]
  FeeExceedsValue { value: Amount, fee: Amount },
  #[error("contract has no parties")]
  NoParties,
  #[error("invalid party `{input}`, expected `<ADDRESS>=<SHARE>`")]
  PartyParse { input: String },
  #[error("party shares sum to {total}, expected {}", SHARE_TOTAL)]
  ShareTotal { total: u64 },
  #[error("input value of {} sats is out of range", .value.to_sat())]
  ValueRange { value: Amount },
}
