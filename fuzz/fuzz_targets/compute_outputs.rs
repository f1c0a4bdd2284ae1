#![no_main]

use {
  arbitrary::Arbitrary,
  bitcoin::{Amount, ScriptBuf},
  covenant::{DUST_THRESHOLD, MAX_SCRIPT_INT, Party, compute_outputs},
  libfuzzer_sys::fuzz_target,
};

#[derive(Arbitrary, Debug)]
struct Input {
  value: u64,
  fee: u16,
  share: u16,
  script: Vec<u8>,
}

const ALICE: &str = "ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kc";
const BOB: &str = "ecash:qq830d643lw865u0x7mpc4yzsrvt9peccggju7td2v";

fuzz_target!(|input: Input| {
  let share = u64::from(input.share % 1001);

  let parties = [Party::new(ALICE, share), Party::new(BOB, 1000 - share)];

  let value = Amount::from_sat(input.value);
  let fee = Amount::from_sat(input.fee.into());

  let Ok(outputs) = compute_outputs(value, fee, &ScriptBuf::from(input.script), &parties) else {
    return;
  };

  assert!(!outputs.is_empty());

  let total = outputs.iter().map(|output| output.value).sum::<Amount>();

  if input.value > MAX_SCRIPT_INT {
    assert_eq!(outputs.len(), 2);
    assert_eq!(total + fee, value);
    assert!(outputs[0].value >= outputs[1].value);
  } else {
    assert!(total + fee <= value);

    for output in &outputs {
      assert!(output.value >= DUST_THRESHOLD || output.value == Amount::ZERO);
    }
  }
});
