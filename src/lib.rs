use {
  self::{
    arguments::Arguments,
    chain::Chain,
    options::Options,
    settings::Settings,
    subcommand::{OutputFormat, Subcommand},
  },
  anyhow::{Context, Error, anyhow, bail, ensure},
  bitcoin::{
    Amount, OutPoint, Script, ScriptBuf, TxOut,
    hashes::{Hash, sha256d},
  },
  clap::Parser,
  covenant::{Branch, CashAddress, Contract, Party, Prefix},
  serde::{Deserialize, Serialize},
  snafu::{ErrorCompat, Snafu},
  std::{
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs::File,
    io,
    path::{Path, PathBuf},
    process,
    str::FromStr,
  },
};

pub use self::error::SnafuError;

pub mod arguments;
mod chain;
mod error;
pub mod options;
pub mod settings;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;
type SnafuResult<T = (), E = SnafuError> = std::result::Result<T, E>;

fn hex_hash(hash: sha256d::Hash) -> String {
  hex::encode(hash.to_byte_array())
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      if let SnafuError::Anyhow { err } = err {
        for (i, err) in err.chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }

        if env::var_os("RUST_BACKTRACE")
          .map(|val| val == "1")
          .unwrap_or_default()
        {
          eprintln!("{}", err.backtrace());
        }
      } else {
        for (i, err) in err.iter_chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print(format.unwrap_or_default());
      }
    }
  }
}
