use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum SnafuError {
  #[snafu(display("{err}"))]
  Anyhow { err: anyhow::Error },
  #[snafu(display("Invalid contract `{}`", path.display()))]
  ContractInvalid {
    source: covenant::Error,
    path: PathBuf,
  },
  #[snafu(display("Failed to parse contract file `{}`", path.display()))]
  ContractParse {
    source: serde_yaml::Error,
    path: PathBuf,
  },
  #[snafu(display("Invalid chain `{chain}`"))]
  InvalidChain { chain: String },
  #[snafu(display("I/O error at `{}`", path.display()))]
  Io { source: io::Error, path: PathBuf },
  #[snafu(display("Failed to parse script `{input}`"))]
  ScriptParse {
    source: bitcoin::hex::HexToBytesError,
    input: String,
  },
}

impl From<Error> for SnafuError {
  fn from(err: Error) -> SnafuError {
    Self::Anyhow { err }
  }
}

/// Bridges `snafu::ResultExt::context`, which is otherwise shadowed by
/// `anyhow::Context::context`.
pub(crate) trait ResultExt<T, E>: Sized {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat,
  {
    use snafu::ResultExt;
    self.context(context)
  }
}
