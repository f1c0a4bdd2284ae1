use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Prevouts {
  #[arg(
    required = true,
    help = "Serialize <OUTPOINT>s in order. Outpoints are formatted as `<TXID>:<VOUT>`."
  )]
  outpoints: Vec<OutPoint>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub serialized: String,
  pub hash: String,
}

impl Prevouts {
  pub(crate) fn run(self) -> SubcommandResult {
    Ok(Some(Box::new(Output {
      serialized: hex::encode(covenant::serialize_outpoints(&self.outpoints)),
      hash: hex_hash(covenant::hash_prevouts(&self.outpoints)),
    })))
  }
}
