use super::*;

/// The covenant rule a spend of a given value falls under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
  /// Re-locked under the covenant in two halves.
  #[display("split")]
  Split,
  #[display("distribute")]
  Distribute,
  /// Every share rounded below dust.
  #[display("no-payout")]
  NoPayout,
}

impl Branch {
  pub fn of(value: Amount, outputs: &[TxOut]) -> Self {
    if value.to_sat() > MAX_SCRIPT_INT {
      Self::Split
    } else if outputs
      .iter()
      .all(|output| output.script_pubkey == no_payout_script())
    {
      Self::NoPayout
    } else {
      Self::Distribute
    }
  }
}

pub(crate) fn no_payout_script() -> ScriptBuf {
  script::Builder::new()
    .push_opcode(opcodes::all::OP_RETURN)
    .into_script()
}

/// Computes the only output list the covenant accepts when a coin of `value`
/// is spent, given the `fee` and `parties` the covenant was created with.
///
/// Values above [`MAX_SCRIPT_INT`] are re-locked under `covenant` in two
/// outputs, the first of which carries the odd unit. Smaller values are
/// divided into thousandths and paid out in party order, skipping any party
/// whose payout is below [`DUST_THRESHOLD`]. If every party is skipped, the
/// single output is a zero-value `OP_RETURN`.
///
/// Division remainders are not redistributed and are lost to the fee.
///
/// Shares are not checked against [`SHARE_TOTAL`]; see [`Contract::check`].
pub fn compute_outputs(
  value: Amount,
  fee: Amount,
  covenant: &Script,
  parties: &[Party],
) -> Result<Vec<TxOut>> {
  let output_value = value
    .checked_sub(fee)
    .ok_or(Error::FeeExceedsValue { value, fee })?;

  let output_value =
    i64::try_from(output_value.to_sat()).map_err(|_| Error::ValueRange { value })?;

  if value.to_sat() > MAX_SCRIPT_INT {
    log::debug!(
      "input value of {} sats exceeds script arithmetic range, splitting",
      value.to_sat()
    );

    let script_pubkey = ScriptBuf::new_p2sh(&covenant.script_hash());

    let half = quotient(output_value, 2);

    return Ok(vec![
      TxOut {
        value: sats(output_value - half),
        script_pubkey: script_pubkey.clone(),
      },
      TxOut {
        value: sats(half),
        script_pubkey,
      },
    ]);
  }

  let unit = quotient(output_value, SHARE_TOTAL as i64).unsigned_abs();

  let mut outputs = Vec::with_capacity(parties.len());

  for party in parties {
    let amount = party
      .share
      .checked_mul(unit)
      .map(Amount::from_sat)
      .ok_or(Error::ValueRange { value })?;

    if amount < DUST_THRESHOLD {
      log::debug!(
        "skipping {party}: payout of {} sats is below dust",
        amount.to_sat()
      );
      continue;
    }

    outputs.push(TxOut {
      value: amount,
      script_pubkey: party.script_pubkey()?,
    });
  }

  if outputs.is_empty() {
    outputs.push(TxOut {
      value: Amount::ZERO,
      script_pubkey: no_payout_script(),
    });
  }

  Ok(outputs)
}

// non-negative by construction
fn sats(n: i64) -> Amount {
  Amount::from_sat(n.unsigned_abs())
}
