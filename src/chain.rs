use {super::*, clap::ValueEnum};

#[derive(Default, ValueEnum, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
  #[default]
  #[value(alias("mainnet"))]
  Ecash,
  #[value(alias("testnet"))]
  Ectest,
  #[value(alias("regtest"))]
  Ecregtest,
}

impl Chain {
  pub(crate) fn prefix(self) -> Prefix {
    match self {
      Self::Ecash => Prefix::Ecash,
      Self::Ectest => Prefix::Ectest,
      Self::Ecregtest => Prefix::Ecregtest,
    }
  }

  pub(crate) fn address_from_script(self, script: &Script) -> Option<CashAddress> {
    CashAddress::from_script(self.prefix(), script)
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Ecash => "ecash",
        Self::Ectest => "ectest",
        Self::Ecregtest => "ecregtest",
      }
    )
  }
}

impl FromStr for Chain {
  type Err = SnafuError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "ecash" | "mainnet" => Ok(Self::Ecash),
      "ectest" | "testnet" => Ok(Self::Ectest),
      "ecregtest" | "regtest" => Ok(Self::Ecregtest),
      _ => Err(SnafuError::InvalidChain {
        chain: s.to_string(),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_str() {
    assert_eq!("ecash".parse::<Chain>().unwrap(), Chain::Ecash);
    assert_eq!("mainnet".parse::<Chain>().unwrap(), Chain::Ecash);
    assert_eq!("ectest".parse::<Chain>().unwrap(), Chain::Ectest);
    assert_eq!("regtest".parse::<Chain>().unwrap(), Chain::Ecregtest);
    assert_eq!(
      "foo".parse::<Chain>().unwrap_err().to_string(),
      "Invalid chain `foo`"
    );
  }

  #[test]
  fn display_matches_address_prefix() {
    for chain in [Chain::Ecash, Chain::Ectest, Chain::Ecregtest] {
      assert_eq!(chain.to_string(), chain.prefix().to_string());
      assert_eq!(chain.to_string().parse::<Chain>().unwrap(), chain);
    }
  }
}
