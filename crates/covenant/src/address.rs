//! CashAddr encoding of P2PKH and P2SH destinations.

use {
  super::*,
  bech32::{
    ByteIterExt, Checksum, Fe32, Fe32IterExt,
    primitives::checksum::{Engine, PackedFe32},
  },
};

const CHECKSUM_LENGTH: usize = 8;

const HASH_LENGTH: usize = 20;

// version byte followed by a 160-bit hash, in 5-bit groups
const PAYLOAD_LENGTH: usize = 34;

/// The 40-bit BCH code that CashAddr checksums with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum CashAddrChecksum {}

impl Checksum for CashAddrChecksum {
  type MidstateRepr = u64;

  const CODE_LENGTH: usize = 1023;

  const CHECKSUM_LENGTH: usize = CHECKSUM_LENGTH;

  const GENERATOR_SH: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
  ];

  const TARGET_RESIDUE: u64 = 1;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
  #[display("ecash")]
  Ecash,
  #[display("ectest")]
  Ectest,
  #[display("ecregtest")]
  Ecregtest,
}

impl Prefix {
  pub const ALL: [Self; 3] = [Self::Ecash, Self::Ectest, Self::Ecregtest];
}

impl FromStr for Prefix {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|prefix| prefix.to_string() == s)
      .ok_or_else(|| Error::Prefix(s.into()))
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
  #[display("p2pkh")]
  P2pkh,
  #[display("p2sh")]
  P2sh,
}

impl AddressType {
  fn version(self) -> u8 {
    match self {
      Self::P2pkh => 0x00,
      Self::P2sh => 0x08,
    }
  }

  fn from_version(version: u8) -> Result<Self, Error> {
    match version {
      0x00 => Ok(Self::P2pkh),
      0x08 => Ok(Self::P2sh),
      _ => Err(Error::Version(version)),
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay)]
pub struct CashAddress {
  pub prefix: Prefix,
  pub address_type: AddressType,
  pub hash: [u8; HASH_LENGTH],
}

impl CashAddress {
  /// The address of coins locked to the hash of `script`.
  pub fn p2sh(prefix: Prefix, script: &Script) -> Self {
    Self {
      prefix,
      address_type: AddressType::P2sh,
      hash: script.script_hash().to_byte_array(),
    }
  }

  pub fn script_pubkey(&self) -> ScriptBuf {
    match self.address_type {
      AddressType::P2pkh => ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array(self.hash)),
      AddressType::P2sh => ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(self.hash)),
    }
  }

  /// Recovers the address paying to `script`, if it is a standard P2PKH or
  /// P2SH output script.
  pub fn from_script(prefix: Prefix, script: &Script) -> Option<Self> {
    let bytes = script.as_bytes();

    let (address_type, hash) = if script.is_p2pkh() {
      (AddressType::P2pkh, &bytes[3..23])
    } else if script.is_p2sh() {
      (AddressType::P2sh, &bytes[2..22])
    } else {
      return None;
    };

    Some(Self {
      prefix,
      address_type,
      hash: hash.try_into().ok()?,
    })
  }

  fn decode(prefix: Prefix, payload: &str) -> Result<Self, Error> {
    let data = payload
      .chars()
      .map(|c| Fe32::from_char(c).map_err(|_| Error::Character(c)))
      .collect::<Result<Vec<Fe32>, Error>>()?;

    if data.len() != PAYLOAD_LENGTH + CHECKSUM_LENGTH {
      return Err(Error::Length(data.len()));
    }

    let mut engine = engine(prefix);

    for &fe in &data {
      engine.input_fe(fe);
    }

    if *engine.residue() != CashAddrChecksum::TARGET_RESIDUE {
      return Err(Error::Checksum);
    }

    let payload = &data[..PAYLOAD_LENGTH];

    let bytes = payload.iter().copied().fes_to_bytes().collect::<Vec<u8>>();

    if !bytes.iter().copied().bytes_to_fes().eq(payload.iter().copied()) {
      return Err(Error::Padding);
    }

    let (&version, hash) = bytes.split_first().ok_or(Error::Length(0))?;

    Ok(Self {
      prefix,
      address_type: AddressType::from_version(version)?,
      hash: hash.try_into().map_err(|_| Error::Length(data.len()))?,
    })
  }
}

impl Display for CashAddress {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let data = iter::once(self.address_type.version())
      .chain(self.hash)
      .bytes_to_fes()
      .collect::<Vec<Fe32>>();

    let mut engine = engine(self.prefix);

    for &fe in &data {
      engine.input_fe(fe);
    }

    engine.input_target_residue();

    let checksum = *engine.residue();

    write!(f, "{}:", self.prefix)?;

    for fe in data {
      write!(f, "{fe}")?;
    }

    for i in (0..CHECKSUM_LENGTH).rev() {
      write!(f, "{}", five_bits(checksum.unpack(i)))?;
    }

    Ok(())
  }
}

impl FromStr for CashAddress {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.chars().any(|c| c.is_ascii_lowercase()) && s.chars().any(|c| c.is_ascii_uppercase()) {
      return Err(Error::MixedCase);
    }

    let s = s.to_ascii_lowercase();

    if let Some((prefix, payload)) = s.split_once(':') {
      return Self::decode(prefix.parse()?, payload);
    }

    // a checksum mismatch only rules out one prefix, anything else rules out all of them
    for prefix in Prefix::ALL {
      match Self::decode(prefix, &s) {
        Err(Error::Checksum) => continue,
        result => return result,
      }
    }

    Err(Error::Checksum)
  }
}

/// A checksum engine primed with the lower five bits of each prefix
/// character and a zero separator.
fn engine(prefix: Prefix) -> Engine<CashAddrChecksum> {
  let mut engine = Engine::new();

  for byte in prefix.to_string().bytes() {
    engine.input_fe(five_bits(byte));
  }

  engine.input_fe(Fe32::Q);

  engine
}

fn five_bits(value: u8) -> Fe32 {
  Fe32::try_from(value & 0x1f).expect("masked to five bits")
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("invalid character `{0}`")]
  Character(char),
  #[error("invalid checksum")]
  Checksum,
  #[error("invalid payload length {0}")]
  Length(usize),
  #[error("mixed case")]
  MixedCase,
  #[error("non-zero padding")]
  Padding,
  #[error("unknown prefix `{0}`")]
  Prefix(String),
  #[error("unsupported version byte {0:#04x}")]
  Version(u8),
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  const ALICE: &str = "ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kc";
  const BOB: &str = "ecash:qq830d643lw865u0x7mpc4yzsrvt9peccggju7td2v";

  fn hash(s: &str) -> [u8; HASH_LENGTH] {
    hex::decode(s).unwrap().try_into().unwrap()
  }

  #[test]
  fn decode() {
    #[track_caller]
    fn case(s: &str, prefix: Prefix, address_type: AddressType, h: &str) {
      assert_eq!(
        s.parse::<CashAddress>().unwrap(),
        CashAddress {
          prefix,
          address_type,
          hash: hash(h),
        },
      );
    }

    case(
      ALICE,
      Prefix::Ecash,
      AddressType::P2pkh,
      "147c021a6995105ea0e62762b23f5497520d5556",
    );
    case(
      BOB,
      Prefix::Ecash,
      AddressType::P2pkh,
      "0f17b7558fdc7d538f37b61c548280d8b28738c2",
    );
    case(
      "ecash:prfhcnyqnl5cgrnmlfmms675w93ld7mvvqd0y8lz07",
      Prefix::Ecash,
      AddressType::P2sh,
      "d37c4c809fe9840e7bfa77b86bd47163f6fb6c60",
    );
    case(
      "ectest:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cqt7nfg4f",
      Prefix::Ectest,
      AddressType::P2pkh,
      "147c021a6995105ea0e62762b23f5497520d5556",
    );
  }

  #[test]
  fn prefix_may_be_omitted() {
    assert_eq!(
      "qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kc"
        .parse::<CashAddress>()
        .unwrap(),
      ALICE.parse::<CashAddress>().unwrap(),
    );
    assert_eq!(
      "qq28cqs6dx23qh4qucnk9v3l2jt4yr242cqt7nfg4f"
        .parse::<CashAddress>()
        .unwrap()
        .prefix,
      Prefix::Ectest,
    );
  }

  #[test]
  fn uppercase_is_accepted() {
    assert_eq!(
      ALICE.to_uppercase().parse::<CashAddress>().unwrap(),
      ALICE.parse::<CashAddress>().unwrap(),
    );
  }

  #[test]
  fn errors() {
    #[track_caller]
    fn case(s: &str, error: Error) {
      assert_eq!(s.parse::<CashAddress>().unwrap_err(), error);
    }

    case("ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kd", Error::Checksum);
    case("ectest:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kc", Error::Checksum);
    case("bitcoincash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kc", Error::Prefix("bitcoincash".into()));
    case("ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kb", Error::Character('b'));
    case("ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9", Error::Length(40));
    case("ecash:qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kC", Error::MixedCase);
  }

  #[test]
  fn prefixless_errors_are_not_reported_as_checksum_errors() {
    assert_eq!(
      "qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kb".parse::<CashAddress>(),
      Err(Error::Character('b')),
    );
    assert_eq!(
      "qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9".parse::<CashAddress>(),
      Err(Error::Length(40)),
    );
    assert_eq!(
      "qq28cqs6dx23qh4qucnk9v3l2jt4yr242cxqqnw9kd".parse::<CashAddress>(),
      Err(Error::Checksum),
    );
  }

  #[test]
  fn checksum_generators_are_consistent() {
    CashAddrChecksum::sanity_check();
  }

  #[test]
  fn display_roundtrips() {
    for s in [
      ALICE,
      BOB,
      "ecash:prfhcnyqnl5cgrnmlfmms675w93ld7mvvqd0y8lz07",
      "ecregtest:prdpw30fk4ym6zl6rftfjuw806arpn26fvkgfu97xt",
    ] {
      assert_eq!(s.parse::<CashAddress>().unwrap().to_string(), s);
    }
  }

  #[test]
  fn covenant_address() {
    let script = ScriptBuf::from_hex("51").unwrap();

    assert_eq!(
      CashAddress::p2sh(Prefix::Ecash, &script).to_string(),
      "ecash:prdpw30fk4ym6zl6rftfjuw806arpn26fv744447ex",
    );
    assert_eq!(
      CashAddress::p2sh(Prefix::Ecregtest, &script).to_string(),
      "ecregtest:prdpw30fk4ym6zl6rftfjuw806arpn26fvkgfu97xt",
    );
  }

  #[test]
  fn script_pubkey() {
    assert_eq!(
      ALICE.parse::<CashAddress>().unwrap().script_pubkey().to_hex_string(),
      "76a914147c021a6995105ea0e62762b23f5497520d555688ac",
    );
    assert_eq!(
      "ecash:prfhcnyqnl5cgrnmlfmms675w93ld7mvvqd0y8lz07"
        .parse::<CashAddress>()
        .unwrap()
        .script_pubkey()
        .to_hex_string(),
      "a914d37c4c809fe9840e7bfa77b86bd47163f6fb6c6087",
    );
  }

  #[test]
  fn from_script() {
    let address = ALICE.parse::<CashAddress>().unwrap();
    assert_eq!(
      CashAddress::from_script(Prefix::Ecash, &address.script_pubkey()),
      Some(address),
    );
    assert_eq!(
      CashAddress::from_script(Prefix::Ecash, &ScriptBuf::from_hex("6a").unwrap()),
      None,
    );
  }

  #[test]
  fn serde() {
    let address = ALICE.parse::<CashAddress>().unwrap();
    let json = format!("\"{ALICE}\"");
    assert_eq!(serde_json::to_string(&address).unwrap(), json);
    assert_eq!(serde_json::from_str::<CashAddress>(&json).unwrap(), address);
  }
}
