use super::*;

/// The parameters a covenant script is generated from. Every spend of a coin
/// locked under the covenant must use the same fee and parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contract {
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub fee: Amount,
  pub parties: Vec<Party>,
}

/// The outputs of a single spend, and what was lost to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
  pub branch: Branch,
  pub value: Amount,
  pub outputs: Vec<TxOut>,
  pub loss: Amount,
}

/// `count` coins of `value`, all spent the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Spend {
  pub value: Amount,
  pub count: u64,
  pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Generation {
  pub spends: Vec<Spend>,
}

/// Every spend needed to pay out a coin, following split outputs until all
/// value has been distributed.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
  pub generations: Vec<Generation>,
  pub payouts: BTreeMap<ScriptBuf, Amount>,
  pub fees: Amount,
  pub loss: Amount,
}

impl Contract {
  pub fn new(fee: Amount, parties: Vec<Party>) -> Result<Self> {
    let contract = Self { fee, parties };
    contract.check()?;
    Ok(contract)
  }

  /// Checks that there is at least one party, that shares add up to
  /// [`SHARE_TOTAL`], and that every address decodes.
  pub fn check(&self) -> Result {
    if self.parties.is_empty() {
      return Err(Error::NoParties);
    }

    let total = self
      .parties
      .iter()
      .fold(0u64, |total, party| total.saturating_add(party.share));

    if total != SHARE_TOTAL {
      return Err(Error::ShareTotal { total });
    }

    for party in &self.parties {
      party.cash_address()?;
    }

    Ok(())
  }

  /// The outputs a spend of `value` must create. Fails if the contract does
  /// not pass [`Contract::check`], since its fields are public.
  pub fn outputs(&self, value: Amount, covenant: &Script) -> Result<Vec<TxOut>> {
    self.check()?;
    compute_outputs(value, self.fee, covenant, &self.parties)
  }

  pub fn distribution(&self, value: Amount, covenant: &Script) -> Result<Distribution> {
    let outputs = self.outputs(value, covenant)?;

    let paid = outputs.iter().map(|output| output.value).sum::<Amount>();

    Ok(Distribution {
      branch: Branch::of(value, &outputs),
      value,
      loss: value - self.fee - paid,
      outputs,
    })
  }

  pub fn settle(&self, value: Amount, covenant: &Script) -> Result<Settlement> {
    let mut coins = BTreeMap::from([(value, 1u64)]);
    let mut generations = Vec::new();
    let mut payouts = BTreeMap::<ScriptBuf, Amount>::new();
    let mut fees = Amount::ZERO;
    let mut loss = Amount::ZERO;

    while !coins.is_empty() {
      let mut next = BTreeMap::<Amount, u64>::new();
      let mut generation = Generation::default();

      for (value, count) in coins.into_iter().rev() {
        let distribution = self.distribution(value, covenant)?;

        fees += self.fee * count;
        loss += distribution.loss * count;

        for output in &distribution.outputs {
          match distribution.branch {
            Branch::Split => *next.entry(output.value).or_default() += count,
            Branch::Distribute => {
              *payouts.entry(output.script_pubkey.clone()).or_default() += output.value * count;
            }
            Branch::NoPayout => {}
          }
        }

        generation.spends.push(Spend {
          value,
          count,
          distribution,
        });
      }

      log::debug!(
        "generation {} spends {} coins",
        generations.len(),
        generation.spends.iter().map(|spend| spend.count).sum::<u64>(),
      );

      generations.push(generation);
      coins = next;
    }

    Ok(Settlement {
      generations,
      payouts,
      fees,
      loss,
    })
  }
}

impl Settlement {
  pub fn paid(&self) -> Amount {
    self.payouts.values().copied().sum()
  }
}
