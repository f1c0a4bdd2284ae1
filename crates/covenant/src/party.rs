use super::*;

/// A payee of the covenant and its share of every distribution, in
/// thousandths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Party {
  pub address: String,
  pub share: u64,
}

impl Party {
  pub fn new(address: impl Into<String>, share: u64) -> Self {
    Self {
      address: address.into(),
      share,
    }
  }

  pub fn cash_address(&self) -> Result<CashAddress> {
    self
      .address
      .parse()
      .map_err(|source| Error::Address {
        address: self.address.clone(),
        source,
      })
  }

  pub fn script_pubkey(&self) -> Result<ScriptBuf> {
    Ok(self.cash_address()?.script_pubkey())
  }
}

impl Display for Party {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}={}", self.address, self.share)
  }
}

impl FromStr for Party {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parse_error = || Error::PartyParse { input: s.into() };

    let (address, share) = s.rsplit_once('=').ok_or_else(parse_error)?;

    let party = Self {
      address: address.into(),
      share: share.parse().map_err(|_| parse_error())?,
    };

    party.cash_address()?;

    Ok(party)
  }
}
