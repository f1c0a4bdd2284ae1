use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Settle {
  #[arg(long, help = "Pay out a covenant coin worth <VALUE> sats.")]
  value: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub value: u64,
  pub paid: u64,
  pub fees: u64,
  pub loss: u64,
  pub generations: Vec<Vec<Spend>>,
  pub payouts: Vec<TxOutput>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Spend {
  pub value: u64,
  pub count: u64,
  pub branch: Branch,
  pub outputs: Vec<TxOutput>,
}

impl Settle {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let contract = settings.contract()?;
    let script = settings.script()?;
    let chain = settings.chain();

    let settlement = contract
      .settle(Amount::from_sat(self.value), &script)
      .with_context(|| format!("failed to settle {} sats", self.value))?;

    let generations = settlement
      .generations
      .iter()
      .map(|generation| {
        generation
          .spends
          .iter()
          .map(|spend| Spend {
            value: spend.value.to_sat(),
            count: spend.count,
            branch: spend.distribution.branch,
            outputs: spend
              .distribution
              .outputs
              .iter()
              .map(|output| TxOutput::new(output, chain))
              .collect(),
          })
          .collect()
      })
      .collect();

    let paid = settlement.paid();

    let mut remaining = settlement.payouts;

    // in party order
    let payouts = contract
      .parties
      .iter()
      .map(Party::script_pubkey)
      .collect::<covenant::Result<Vec<ScriptBuf>>>()?
      .into_iter()
      .filter_map(|script_pubkey| {
        let value = remaining.remove(&script_pubkey)?;
        Some(TxOutput::new(
          &TxOut {
            value,
            script_pubkey,
          },
          chain,
        ))
      })
      .collect();

    Ok(Some(Box::new(Output {
      value: self.value,
      paid: paid.to_sat(),
      fees: settlement.fees.to_sat(),
      loss: settlement.loss.to_sat(),
      generations,
      payouts,
    })))
  }
}
