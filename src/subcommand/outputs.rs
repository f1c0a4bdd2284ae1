use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Outputs {
  #[arg(long, help = "Spend a covenant coin worth <VALUE> sats.")]
  value: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub branch: Branch,
  pub value: u64,
  pub fee: u64,
  pub loss: u64,
  pub outputs: Vec<TxOutput>,
  pub serialized: String,
  pub hash: String,
}

impl Outputs {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let contract = settings.contract()?;
    let script = settings.script()?;

    let value = Amount::from_sat(self.value);

    let distribution = contract
      .distribution(value, &script)
      .with_context(|| format!("failed to compute outputs for {} sats", self.value))?;

    Ok(Some(Box::new(Output {
      branch: distribution.branch,
      value: self.value,
      fee: contract.fee.to_sat(),
      loss: distribution.loss.to_sat(),
      outputs: distribution
        .outputs
        .iter()
        .map(|output| TxOutput::new(output, settings.chain()))
        .collect(),
      serialized: hex::encode(covenant::serialize_outputs(&distribution.outputs)),
      hash: hex_hash(covenant::hash_outputs(&distribution.outputs)),
    })))
  }
}
