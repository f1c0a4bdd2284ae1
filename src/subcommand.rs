use super::*;

pub mod address;
pub mod contract;
pub mod outputs;
pub mod prevouts;
pub mod settle;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Display the covenant address")]
  Address,
  #[command(about = "Display contract fee and party shares")]
  Contract,
  #[command(about = "Compute the outputs of a covenant spend")]
  Outputs(outputs::Outputs),
  #[command(about = "Serialize previous outputs")]
  Prevouts(prevouts::Prevouts),
  #[command(about = "Compute every spend needed to pay out a coin")]
  Settle(settle::Settle),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Address => address::run(settings),
      Self::Contract => contract::run(settings),
      Self::Outputs(outputs) => outputs.run(settings),
      Self::Prevouts(prevouts) => prevouts.run(),
      Self::Settle(settle) => settle.run(settings),
    }
  }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Minify,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    match format {
      OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), self).ok(),
      OutputFormat::Yaml => serde_yaml::to_writer(io::stdout(), self).ok(),
      OutputFormat::Minify => serde_json::to_writer(io::stdout(), self).ok(),
    };
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;

/// A transaction output as printed by subcommands.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
  pub value: u64,
  pub script_pubkey: String,
  pub address: Option<CashAddress>,
}

impl TxOutput {
  pub(crate) fn new(output: &TxOut, chain: Chain) -> Self {
    Self {
      value: output.value.to_sat(),
      script_pubkey: output.script_pubkey.to_hex_string(),
      address: chain.address_from_script(&output.script_pubkey),
    }
  }
}
