use {super::*, subcommand::outputs::Output};

fn outputs(value: u64) -> Output {
  CommandBuilder::new(format!(
    "--contract contract.yaml --script 51 outputs --value {value}"
  ))
  .with_contract()
  .run_and_deserialize_output()
}

#[test]
fn full_distribution() {
  pretty_assert_eq!(
    outputs(123456789),
    Output {
      branch: Branch::Distribute,
      value: 123456789,
      fee: 2000,
      loss: 789,
      outputs: vec![
        tx_output(111108600, ALICE_SCRIPT, Some(ALICE)),
        tx_output(12345400, BOB_SCRIPT, Some(BOB)),
      ],
      serialized: "f8619f06000000001976a914147c021a6995105ea0e62762b23f5497520d555688ac\
                   3860bc00000000001976a9140f17b7558fdc7d538f37b61c548280d8b28738c288ac"
        .into(),
      hash: "b6f671412ba532e6954e4902163c6880ff6f211b003e427156fe43b71759edf5".into(),
    }
  );
}

#[test]
fn split() {
  pretty_assert_eq!(
    outputs(4123456789),
    Output {
      branch: Branch::Split,
      value: 4123456789,
      fee: 2000,
      loss: 0,
      outputs: vec![
        tx_output(2061727395, COVENANT_P2SH, Some(COVENANT_ADDRESS)),
        tx_output(2061727394, COVENANT_P2SH, Some(COVENANT_ADDRESS)),
      ],
      serialized: "a376e37a0000000017a914da1745e9b549bd0bfa1a569971c77eba30cd5a4b87\
                   a276e37a0000000017a914da1745e9b549bd0bfa1a569971c77eba30cd5a4b87"
        .into(),
      hash: "a66adeeec9b41e9b35bf3d1fac9cc501ccdabe9fa4d3c11eaf89d6dc04c22639".into(),
    }
  );
}

#[test]
fn partial_distribution() {
  let output = outputs(3000);

  assert_eq!(output.branch, Branch::Distribute);
  assert_eq!(output.loss, 100);
  assert_eq!(output.outputs, [tx_output(900, ALICE_SCRIPT, Some(ALICE))]);
  assert_eq!(
    output.hash,
    "23172f5ad5d044ab68a5915feb47c52bda3595762e7cdc26d76ca50d6fdb6150",
  );
}

#[test]
fn no_payout() {
  pretty_assert_eq!(
    outputs(2999),
    Output {
      branch: Branch::NoPayout,
      value: 2999,
      fee: 2000,
      loss: 999,
      outputs: vec![tx_output(0, "6a", None)],
      serialized: "0000000000000000016a".into(),
      hash: "0e8538c66c434675836e2198aceb9a0bb62f3778a505eba907d843d312712b6d".into(),
    }
  );
}

#[test]
fn value_below_fee() {
  CommandBuilder::new("--contract contract.yaml --script 51 outputs --value 1999")
    .with_contract()
    .expected_exit_code(1)
    .expected_stderr(
      "error: failed to compute outputs for 1999 sats\n\nbecause:\n- fee of 2000 sats exceeds input value of 1999 sats\n",
    )
    .run_and_extract_stdout();
}

#[test]
fn yaml_format() {
  CommandBuilder::new("--format yaml --contract contract.yaml --script 51 outputs --value 2999")
    .with_contract()
    .stdout_regex("branch: no-payout\nvalue: 2999\n.*")
    .run_and_extract_stdout();
}

#[test]
fn minified_format() {
  CommandBuilder::new("--format minify --contract contract.yaml --script 51 outputs --value 2999")
    .with_contract()
    .stdout_regex(r#"\{"branch":"no-payout","value":2999,.*\}\n"#)
    .run_and_extract_stdout();
}
