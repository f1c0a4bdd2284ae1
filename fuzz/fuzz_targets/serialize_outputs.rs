#![no_main]

use {
  bitcoin::{TxOut, consensus::Decodable},
  covenant::serialize_outputs,
  libfuzzer_sys::fuzz_target,
};

fuzz_target!(|outputs: Vec<(u64, Vec<u8>)>| {
  let outputs = outputs
    .into_iter()
    .map(|(value, script_pubkey)| TxOut {
      value: bitcoin::Amount::from_sat(value),
      script_pubkey: script_pubkey.into(),
    })
    .collect::<Vec<TxOut>>();

  let serialized = serialize_outputs(&outputs);

  let mut cursor = serialized.as_slice();

  for output in &outputs {
    assert_eq!(&TxOut::consensus_decode(&mut cursor).unwrap(), output);
  }

  assert!(cursor.is_empty());
});
