use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub fee: u64,
  pub parties: Vec<Share>,
  pub address: Option<CashAddress>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Share {
  pub address: CashAddress,
  pub share: u64,
  pub script_pubkey: String,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  let contract = settings.contract()?;

  let parties = contract
    .parties
    .iter()
    .map(|party| -> Result<Share> {
      let address = party.cash_address()?;
      Ok(Share {
        address,
        share: party.share,
        script_pubkey: address.script_pubkey().to_hex_string(),
      })
    })
    .collect::<Result<Vec<Share>>>()?;

  // only shown when a covenant script is configured
  let address = settings
    .optional_script()?
    .map(|script| CashAddress::p2sh(settings.chain().prefix(), &script));

  Ok(Some(Box::new(Output {
    fee: contract.fee.to_sat(),
    parties,
    address,
  })))
}
