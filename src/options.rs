use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long = "chain", value_enum, help = "Use <CHAIN>. [default: ecash]")]
  pub(crate) chain_argument: Option<Chain>,
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Load configuration from <CONFIG_DIR>.")]
  pub(crate) config_dir: Option<PathBuf>,
  #[arg(long, help = "Load contract fee and parties from YAML <CONTRACT>.")]
  pub(crate) contract: Option<PathBuf>,
  #[arg(long, short, help = "Specify output format. [default: json]")]
  pub(crate) format: Option<OutputFormat>,
  #[arg(long, short, help = "Use regtest. Equivalent to `--chain ecregtest`.")]
  pub(crate) regtest: bool,
  #[arg(long, help = "Use hex-encoded covenant <SCRIPT>.")]
  pub(crate) script: Option<String>,
  #[arg(long, short, help = "Use testnet. Equivalent to `--chain ectest`.")]
  pub(crate) testnet: bool,
}
