use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub address: CashAddress,
  pub script_hash: String,
  pub script_pubkey: String,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  let script = settings.script()?;

  let script_hash = script.script_hash();

  Ok(Some(Box::new(Output {
    address: CashAddress::p2sh(settings.chain().prefix(), &script),
    script_hash: script_hash.to_string(),
    script_pubkey: ScriptBuf::new_p2sh(&script_hash).to_hex_string(),
  })))
}
