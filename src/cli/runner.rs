//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::engine::Lister;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::PropertyRecord;
use futures::TryStreamExt;
use std::io::{self, Write};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        let client = HttpClient::new(config.http_config(), config.auth_config())?;

        match &self.cli.command {
            Commands::Properties { format, .. } => {
                self.properties(&client, &config, *format).await
            }
            Commands::Property { id } => self.property(&client, id).await,
        }
    }

    /// Merge the config file with command-line overrides
    fn config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.cli.timeout {
            if timeout == 0 {
                return Err(Error::config("--timeout must be greater than zero"));
            }
            config.timeout_secs = Some(timeout);
        }
        if let Some(var) = &self.cli.api_key_env {
            config.api_key_env = Some(var.clone());
        }
        if let Commands::Properties {
            page_size: Some(size),
            ..
        } = &self.cli.command
        {
            if *size == 0 {
                return Err(Error::config("--page-size must be greater than zero"));
            }
            config.page_size = Some(*size);
        }

        Ok(config)
    }

    /// Print every property in traversal order
    async fn properties(
        &self,
        client: &HttpClient,
        config: &ClientConfig,
        format: OutputFormat,
    ) -> Result<()> {
        let lister = Lister::new(client).with_config(config.list_config());
        let mut stdout = io::stdout();
        print_records(&lister, &mut stdout, format).await?;
        stdout.flush()?;
        Ok(())
    }

    /// Print one property as pretty JSON
    async fn property(&self, client: &HttpClient, id: &str) -> Result<()> {
        let record = client.get_property(id).await?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}

/// Write records as they arrive; a failed write stops the listing before
/// the next page is requested
async fn print_records(
    lister: &Lister<'_>,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()> {
    let records = lister.records::<PropertyRecord>();
    futures::pin_mut!(records);

    while let Some(record) = records.try_next().await? {
        write_record(out, &record, format)?;
    }
    Ok(())
}

fn write_record(out: &mut impl Write, record: &PropertyRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", record.title)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
    }
    Ok(())
}
