use super::*;

const OUTPOINT_SIZE: usize = 36;

/// Serializes `outpoints` the way they appear in a transaction input: txid in
/// internal byte order, then the little-endian output index.
pub fn serialize_outpoints(outpoints: &[OutPoint]) -> Vec<u8> {
  let mut buffer = Vec::with_capacity(outpoints.len() * OUTPOINT_SIZE);

  for outpoint in outpoints {
    outpoint
      .consensus_encode(&mut buffer)
      .expect("in-memory writers don't error");
  }

  buffer
}

/// Serializes `outputs` the way they appear in a transaction: little-endian
/// value, compact-size script length, script bytes.
pub fn serialize_outputs(outputs: &[TxOut]) -> Vec<u8> {
  let mut buffer = Vec::with_capacity(outputs.iter().map(TxOut::size).sum());

  for output in outputs {
    output
      .consensus_encode(&mut buffer)
      .expect("in-memory writers don't error");
  }

  buffer
}

pub fn hash_prevouts(outpoints: &[OutPoint]) -> sha256d::Hash {
  sha256d::Hash::hash(&serialize_outpoints(outpoints))
}

pub fn hash_outputs(outputs: &[TxOut]) -> sha256d::Hash {
  sha256d::Hash::hash(&serialize_outputs(outputs))
}
