use std::io::Read;

use anyhow::{anyhow, Error};
use clap::Parser;
use log::Level;

use b58_config::{Config, DataFormat};
use b58_core::{
    base58::{decode, encode},
    checksum::{check_decode, check_encode},
    multibase::{decode_multibase_base58btc, encode_multibase_base58btc},
};

/// Base58 and Base58Check encoder
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long)]
    pub log_level: Option<Level>,

    /// Representation of binary data: hex or utf8
    #[arg(long)]
    pub format: Option<DataFormat>,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    Encode(Encode),
    Decode(Decode),
    CheckEncode(CheckEncode),
    CheckDecode(CheckDecode),
    MultibaseEncode(MultibaseEncode),
    MultibaseDecode(MultibaseDecode),
    Validate(Validate),
}

impl SubCommand {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        match self {
            Self::Encode(cmd) => cmd.execute(context),
            Self::Decode(cmd) => cmd.execute(context),
            Self::CheckEncode(cmd) => cmd.execute(context),
            Self::CheckDecode(cmd) => cmd.execute(context),
            Self::MultibaseEncode(cmd) => cmd.execute(context),
            Self::MultibaseDecode(cmd) => cmd.execute(context),
            Self::Validate(cmd) => cmd.execute(context),
        }
    }
}

/// Settings shared by all commands
pub struct Context {
    format: DataFormat,
    checksum: bool,
    max_input_length: usize,
}

impl Context {
    pub fn new(config: &Config, override_format: Option<DataFormat>) -> Self {
        Self {
            format: override_format.unwrap_or(config.input_format),
            checksum: config.checksum,
            max_input_length: config.max_input_length,
        }
    }

    // Reads standard input if value is not provided
    fn read_input(&self, value: Option<&str>) -> Result<String, Error> {
        let input = match value {
            Some(value) => value.to_owned(),
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer.trim_end_matches(['\r', '\n']).to_owned()
            },
        };
        if input.len() > self.max_input_length {
            return Err(anyhow!(
                "input is too long ({} > {})",
                input.len(),
                self.max_input_length,
            ));
        };
        Ok(input)
    }

    fn parse_data(&self, value: Option<&str>) -> Result<Vec<u8>, Error> {
        let input = self.read_input(value)?;
        let data = match self.format {
            DataFormat::Hex => hex::decode(input.trim())?,
            DataFormat::Utf8 => input.into_bytes(),
        };
        log::debug!("read {} bytes", data.len());
        Ok(data)
    }

    fn format_data(&self, data: Vec<u8>) -> Result<String, Error> {
        let output = match self.format {
            DataFormat::Hex => hex::encode(data),
            DataFormat::Utf8 => String::from_utf8(data)
                .map_err(|_| anyhow!("decoded data is not valid UTF-8, use hex format"))?,
        };
        Ok(output)
    }
}

/// Encode data as base58
#[derive(Parser)]
pub struct Encode {
    data: Option<String>,
    /// Append checksum (Base58Check)
    #[arg(long)]
    check: bool,
}

impl Encode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let data = context.parse_data(self.data.as_deref())?;
        let output = if self.check || context.checksum {
            check_encode(&data)
        } else {
            encode(&data)
        };
        Ok(output)
    }
}

/// Decode base58 text
#[derive(Parser)]
pub struct Decode {
    text: Option<String>,
    /// Verify and remove checksum (Base58Check)
    #[arg(long)]
    check: bool,
}

impl Decode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let text = context.read_input(self.text.as_deref())?;
        let data = if self.check || context.checksum {
            check_decode(text.trim())?
        } else {
            decode(text.trim())?
        };
        context.format_data(data)
    }
}

/// Encode data as Base58Check
#[derive(Parser)]
pub struct CheckEncode {
    data: Option<String>,
}

impl CheckEncode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let data = context.parse_data(self.data.as_deref())?;
        Ok(check_encode(&data))
    }
}

/// Decode Base58Check text and verify checksum
#[derive(Parser)]
pub struct CheckDecode {
    text: Option<String>,
}

impl CheckDecode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let text = context.read_input(self.text.as_deref())?;
        let data = check_decode(text.trim())?;
        context.format_data(data)
    }
}

/// Encode data as multibase base58btc
#[derive(Parser)]
pub struct MultibaseEncode {
    data: Option<String>,
}

impl MultibaseEncode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let data = context.parse_data(self.data.as_deref())?;
        Ok(encode_multibase_base58btc(&data))
    }
}

/// Decode multibase base58btc text
#[derive(Parser)]
pub struct MultibaseDecode {
    text: Option<String>,
}

impl MultibaseDecode {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let text = context.read_input(self.text.as_deref())?;
        let data = decode_multibase_base58btc(text.trim())?;
        context.format_data(data)
    }
}

/// Check whether text is valid base58
#[derive(Parser)]
pub struct Validate {
    text: Option<String>,
    /// Also verify checksum (Base58Check)
    #[arg(long)]
    check: bool,
}

impl Validate {
    pub fn execute(&self, context: &Context) -> Result<String, Error> {
        let text = context.read_input(self.text.as_deref())?;
        let length = if self.check || context.checksum {
            check_decode(text.trim())?.len()
        } else {
            decode(text.trim())?.len()
        };
        log::info!("valid, {length} bytes");
        Ok("valid".to_string())
    }
}
