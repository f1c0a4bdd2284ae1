use {super::*, error::ResultExt};

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
  chain: Option<Chain>,
  config: Option<PathBuf>,
  config_dir: Option<PathBuf>,
  contract: Option<PathBuf>,
  script: Option<String>,
}

impl Settings {
  pub fn load(options: Options) -> Result<Settings> {
    let mut env = BTreeMap::<String, String>::new();

    for (variable, value) in env::vars_os() {
      let Some(variable) = variable.to_str() else {
        continue;
      };

      let Some(key) = variable.strip_prefix("REVSHARE_") else {
        continue;
      };

      env.insert(
        key.into(),
        value.into_string().map_err(|value| {
          anyhow!(
            "environment variable `{variable}` not valid unicode: `{}`",
            value.to_string_lossy()
          )
        })?,
      );
    }

    Self::merge(options, env)
  }

  pub fn merge(options: Options, env: BTreeMap<String, String>) -> Result<Self> {
    let settings = Settings::from_options(options).or(Settings::from_env(env)?);

    let config_path = match &settings.config {
      Some(path) => Some(path.clone()),
      None => {
        let dir = match &settings.config_dir {
          Some(dir) => dir.clone(),
          None => env::current_dir()?,
        };

        let path = dir.join("revshare.yaml");

        path.exists().then_some(path)
      }
    };

    let config = match config_path {
      Some(config_path) => {
        log::info!("loading configuration from `{}`", config_path.display());

        serde_yaml::from_reader(File::open(&config_path).context(anyhow!(
          "failed to open config file `{}`",
          config_path.display()
        ))?)
        .context(anyhow!(
          "failed to deserialize config file `{}`",
          config_path.display()
        ))?
      }
      None => Settings::default(),
    };

    Ok(settings.or(config).or_defaults())
  }

  fn or(self, source: Settings) -> Self {
    Self {
      chain: self.chain.or(source.chain),
      config: self.config.or(source.config),
      config_dir: self.config_dir.or(source.config_dir),
      contract: self.contract.or(source.contract),
      script: self.script.or(source.script),
    }
  }

  fn or_defaults(self) -> Self {
    Self {
      chain: Some(self.chain.unwrap_or_default()),
      ..self
    }
  }

  fn from_env(env: BTreeMap<String, String>) -> Result<Self> {
    let get_path = |key: &str| env.get(key).map(PathBuf::from);

    let chain = match env.get("CHAIN") {
      Some(chain) => Some(chain.parse::<Chain>()?),
      None => None,
    };

    Ok(Self {
      chain,
      config: get_path("CONFIG"),
      config_dir: get_path("CONFIG_DIR"),
      contract: get_path("CONTRACT"),
      script: env.get("SCRIPT").cloned(),
    })
  }

  fn from_options(options: Options) -> Self {
    Self {
      chain: options
        .chain_argument
        .or(options.regtest.then_some(Chain::Ecregtest))
        .or(options.testnet.then_some(Chain::Ectest)),
      config: options.config,
      config_dir: options.config_dir,
      contract: options.contract,
      script: options.script,
    }
  }

  pub fn chain(&self) -> Chain {
    self.chain.unwrap_or_default()
  }

  /// The covenant script, required by every subcommand that derives outputs.
  pub fn script(&self) -> Result<ScriptBuf> {
    let Some(script) = self.optional_script()? else {
      bail!("no covenant script configured, use `--script` or `REVSHARE_SCRIPT`");
    };

    Ok(script)
  }

  /// The covenant script if one is configured. A configured script that is
  /// not valid hex is still an error.
  pub fn optional_script(&self) -> Result<Option<ScriptBuf>> {
    let Some(script) = &self.script else {
      return Ok(None);
    };

    Ok(Some(
      ScriptBuf::from_hex(script).snafu_context(error::ScriptParse { input: script })?,
    ))
  }

  /// Loads and validates the contract file. Every party address must belong
  /// to the configured chain.
  pub fn contract(&self) -> Result<Contract> {
    let Some(path) = &self.contract else {
      bail!("no contract file configured, use `--contract` or `REVSHARE_CONTRACT`");
    };

    let contract = Self::load_contract(path)?;

    let chain = self.chain();

    for party in &contract.parties {
      let address = party.cash_address()?;
      ensure!(
        address.prefix == chain.prefix(),
        "address `{}` is not valid on {chain}",
        party.address,
      );
    }

    log::info!(
      "loaded contract with {} parties from `{}`",
      contract.parties.len(),
      path.display()
    );

    Ok(contract)
  }

  fn load_contract(path: &Path) -> SnafuResult<Contract> {
    let contract: Contract = serde_yaml::from_reader(File::open(path).snafu_context(error::Io { path })?)
      .snafu_context(error::ContractParse { path })?;

    contract
      .check()
      .snafu_context(error::ContractInvalid { path })?;

    Ok(contract)
  }
}
