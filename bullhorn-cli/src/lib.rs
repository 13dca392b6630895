//! Command-line plumbing for `bhjson`.
//!
//! Reads entity JSON, decodes it into the chosen entity type and writes it
//! back out through [`RestJsonCodec`], so the output shows exactly what the
//! codec would send to the REST API.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bullhorn_json::{CodecConfig, NullBypassFields, RestJsonCodec};
use bullhorn_model::{BullhornEntity, Candidate, ClientContact, JobOrder, Note};
use clap::{Parser, ValueEnum};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "bhjson")]
#[command(about = "Normalize Bullhorn entity JSON through the REST codec")]
pub struct Args {
    /// Entity type the input describes
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Input file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Field to write even when null (repeatable)
    #[arg(long = "include-null", value_name = "FIELD")]
    pub include_null: Vec<String>,

    /// Codec config file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Candidate,
    ClientContact,
    JobOrder,
    Note,
}

impl EntityKind {
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Candidate => Candidate::ENTITY_NAME,
            Self::ClientContact => ClientContact::ENTITY_NAME,
            Self::JobOrder => JobOrder::ENTITY_NAME,
            Self::Note => Note::ENTITY_NAME,
        }
    }
}

/// Builds the codec config from an optional file plus command-line overrides.
pub fn load_config(args: &Args) -> Result<CodecConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => CodecConfig::default(),
    };
    if args.compact {
        config.pretty = false;
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<CodecConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Decodes `input` as `kind` and re-encodes it.
pub fn normalize(args: &Args, input: impl Read) -> Result<String> {
    let codec = RestJsonCodec::with_config(load_config(args)?);
    let bypass: NullBypassFields = if args.include_null.is_empty() {
        codec.config().default_null_bypass.clone()
    } else {
        args.include_null.iter().map(String::as_str).collect()
    };
    debug!(entity = args.entity.entity_name(), bypass = ?bypass, "normalizing");

    match args.entity {
        EntityKind::Candidate => reencode::<Candidate>(&codec, input, &bypass),
        EntityKind::ClientContact => reencode::<ClientContact>(&codec, input, &bypass),
        EntityKind::JobOrder => reencode::<JobOrder>(&codec, input, &bypass),
        EntityKind::Note => reencode::<Note>(&codec, input, &bypass),
    }
}

fn reencode<T: BullhornEntity>(
    codec: &RestJsonCodec,
    input: impl Read,
    bypass: &NullBypassFields,
) -> Result<String> {
    let entity: T = codec
        .decode_reader(input)
        .with_context(|| format!("decoding {}", T::ENTITY_NAME))?;
    let json = codec.encode_with_null_bypass(&entity, bypass);
    if json.is_empty() {
        bail!("failed to encode {}", T::ENTITY_NAME);
    }
    Ok(json)
}
