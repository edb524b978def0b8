//! Command-line interface for the table-configured AES engine.

#![forbid(unsafe_code)]

mod hexio;

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{expand_key, Aes128, Aes128Key, BlockCipher, CipherConfig, SBoxTable};
use aes_modes::{cbc, ctr, ecb, ofb, ChunkSize, CounterWidth, Mode, SegmentSize};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::hexio::{
    format_hex_tokens, format_round_keys, parse_round_keys, parse_sbox_pair, read_hex_file,
    write_hex_file,
};

/// Largest chunk or segment size accepted on the command line.
const MAX_SIZE: usize = 1024;

/// AES-128 block and mode-of-operation CLI.
#[derive(Parser)]
#[command(
    name = "aesmodes",
    version,
    author,
    about = "AES-128 with caller-supplied S-box and round keys (ECB, CBC, OFB, CTR)"
)]
struct Cli {
    /// Print the parameters used for each operation.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Encrypt,
    Decrypt,
}

/// Where the S-box and round keys come from.
#[derive(Args)]
struct TableArgs {
    /// S-box file (16 lines of 32 hex characters); defaults to the AES S-box.
    #[arg(long, value_name = "FILE", conflicts_with = "config")]
    sbox: Option<PathBuf>,
    /// Inverse S-box file in the same format; derived from `--sbox` when absent.
    #[arg(long, value_name = "FILE", conflicts_with = "config")]
    inv_sbox: Option<PathBuf>,
    /// Round-key file (11 lines of 16 hex bytes).
    #[arg(
        long,
        value_name = "FILE",
        required_unless_present = "config",
        conflicts_with = "config"
    )]
    round_keys: Option<PathBuf>,
    /// Configuration bundle written by `pack`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt exactly one 16-byte block.
    Block {
        #[arg(value_enum)]
        op: Operation,
        /// Input file with 16 hex bytes.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output file for the resulting hex bytes.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        #[command(flatten)]
        tables: TableArgs,
    },
    /// Run a message through ECB, CBC, OFB or CTR.
    Mode {
        /// ECB, CBC, OFB or CTR.
        #[arg(long, short)]
        mode: Mode,
        #[arg(long, short, value_enum)]
        op: Operation,
        /// Input file of hex bytes.
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
        /// Output file for the resulting hex bytes.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// IV file with 16 hex bytes; required for every mode but ECB.
        #[arg(long, value_name = "FILE")]
        iv: Option<PathBuf>,
        /// ECB/CBC: chunk size (>= 16). OFB/CTR: XOR segment size (> 0).
        #[arg(long, short = 'b', default_value_t = 16)]
        size: usize,
        /// CTR only: trailing IV bytes used as the counter (8 or 16).
        #[arg(long, default_value_t = 8)]
        counter_width: usize,
        #[command(flatten)]
        tables: TableArgs,
    },
    /// Expand a key into a round-key file.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Output path for the round-key file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// S-box file; defaults to the AES S-box.
        #[arg(long, value_name = "FILE")]
        sbox: Option<PathBuf>,
    },
    /// Bundle an S-box and round keys into one binary configuration file.
    Pack {
        /// Output path for the configuration bundle.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        #[command(flatten)]
        tables: TableArgs,
    },
    /// Run a local demo: random key, every mode, encrypt and decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match cli.command {
        Commands::Block {
            op,
            input,
            output,
            tables,
        } => cmd_block(op, &input, &output, &tables, verbose),
        Commands::Mode {
            mode,
            op,
            input,
            output,
            iv,
            size,
            counter_width,
            tables,
        } => cmd_mode(
            ModeRequest {
                mode,
                op,
                iv: iv.as_deref(),
                size,
                counter_width,
            },
            &input,
            &output,
            &tables,
            verbose,
        ),
        Commands::Expand {
            key_hex,
            output,
            sbox,
        } => cmd_expand(&key_hex, &output, sbox.as_deref()),
        Commands::Pack { output, tables } => cmd_pack(&output, &tables),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_block(
    op: Operation,
    input: &Path,
    output: &Path,
    tables: &TableArgs,
    verbose: bool,
) -> Result<()> {
    let data = read_hex_file(input)?;
    if data.len() != 16 {
        bail!(
            "input must be exactly 128 bits (16 bytes), found {} bytes",
            data.len()
        );
    }
    let cipher = load_cipher(tables)?;
    let result = match op {
        Operation::Encrypt => cipher.encrypt_block(&data)?,
        Operation::Decrypt => cipher.decrypt_block(&data)?,
    };
    write_hex_file(output, &result)?;
    if verbose {
        println!("input:  {}", format_hex_tokens(&data));
        println!("output: {}", format_hex_tokens(&result));
    }
    println!("wrote {}", output.display());
    Ok(())
}

struct ModeRequest<'a> {
    mode: Mode,
    op: Operation,
    iv: Option<&'a Path>,
    size: usize,
    counter_width: usize,
}

fn cmd_mode(
    request: ModeRequest<'_>,
    input: &Path,
    output: &Path,
    tables: &TableArgs,
    verbose: bool,
) -> Result<()> {
    let ModeRequest {
        mode,
        op,
        iv,
        size,
        counter_width,
    } = request;
    if size == 0 || size > MAX_SIZE {
        bail!("chunk/segment size must be in 1..={MAX_SIZE}");
    }
    let iv = match (iv, mode.needs_iv()) {
        (Some(path), true) => read_hex_file(path)?,
        (None, true) => bail!("an IV file is required for {mode} mode (use --iv)"),
        (_, false) => Vec::new(),
    };

    let data = read_hex_file(input)?;
    let cipher = load_cipher(tables)?;
    let result = run_mode(&cipher, mode, op, &data, size, &iv, counter_width)?;
    write_hex_file(output, &result)?;

    if verbose {
        println!("mode: {mode}");
        println!("input: {} ({} bytes)", input.display(), data.len());
        println!("chunk/segment size: {size} bytes");
        if mode == Mode::Ctr {
            println!("counter width: {counter_width} bytes");
        }
    }
    println!("wrote {} bytes to {}", result.len(), output.display());
    Ok(())
}

fn run_mode(
    cipher: &Aes128,
    mode: Mode,
    op: Operation,
    data: &[u8],
    size: usize,
    iv: &[u8],
    counter_width: usize,
) -> Result<Vec<u8>> {
    let result = match mode {
        Mode::Ecb => {
            let chunk = ChunkSize::new(size)?;
            match op {
                Operation::Encrypt => ecb::encrypt(cipher, data, chunk),
                Operation::Decrypt => ecb::decrypt(cipher, data, chunk),
            }
        }
        Mode::Cbc => {
            let chunk = ChunkSize::new(size)?;
            match op {
                Operation::Encrypt => cbc::encrypt(cipher, data, chunk, iv),
                Operation::Decrypt => cbc::decrypt(cipher, data, chunk, iv),
            }
        }
        Mode::Ofb => {
            let segment = SegmentSize::new(size)?;
            match op {
                Operation::Encrypt => ofb::encrypt(cipher, data, segment, iv),
                Operation::Decrypt => ofb::decrypt(cipher, data, segment, iv),
            }
        }
        Mode::Ctr => {
            let segment = SegmentSize::new(size)?;
            let width = CounterWidth::try_from(counter_width)?;
            match op {
                Operation::Encrypt => ctr::encrypt(cipher, data, segment, iv, width),
                Operation::Decrypt => ctr::decrypt(cipher, data, segment, iv, width),
            }
        }
    };
    result.with_context(|| format!("{mode} operation failed"))
}

fn cmd_expand(key_hex: &str, output: &Path, sbox: Option<&Path>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let sbox = load_sbox(sbox, None)?;
    let round_keys = expand_key(&key, &sbox);
    fs::write(output, format_round_keys(&round_keys))
        .with_context(|| format!("write {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_pack(output: &Path, tables: &TableArgs) -> Result<()> {
    let config = load_config(tables)?;
    let bytes = config.to_bytes().context("serialize configuration")?;
    fs::write(output, bytes).with_context(|| format!("write {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut iv = [0u8; 16];
    let mut message = [0u8; 45];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);
    // zero padding would swallow a trailing zero byte
    message[44] |= 1;

    let cipher = Aes128::new(CipherConfig::from_key(&Aes128Key::from(key_bytes)));
    println!("demo key: {}", hex::encode(key_bytes));
    println!("iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(message));

    for mode in Mode::ALL {
        let size = if mode.is_block_mode() { 16 } else { 7 };
        let ciphertext = run_mode(&cipher, mode, Operation::Encrypt, &message, size, &iv, 8)?;
        let decrypted = run_mode(&cipher, mode, Operation::Decrypt, &ciphertext, size, &iv, 8)?;
        println!("{mode} ciphertext: {}", hex::encode(&ciphertext));
        if decrypted != message {
            bail!("{mode} demo roundtrip failed");
        }
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let compact: String = hex_str.split_whitespace().collect();
    let bytes = hex::decode(compact).context("decode key hex")?;
    let key: [u8; 16] = bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("AES-128 key must be 16 bytes (32 hex characters)"))?;
    Ok(Aes128Key::from(key))
}

fn read_optional(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|path| fs::read_to_string(path).with_context(|| format!("read {}", path.display())))
        .transpose()
}

fn load_sbox(forward: Option<&Path>, inverse: Option<&Path>) -> Result<SBoxTable> {
    let forward_text = read_optional(forward)?;
    let inverse_text = read_optional(inverse)?;
    parse_sbox_pair(forward_text.as_deref(), inverse_text.as_deref()).context("load S-box")
}

fn load_config(tables: &TableArgs) -> Result<CipherConfig> {
    if let Some(path) = &tables.config {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        return CipherConfig::from_bytes(&bytes)
            .with_context(|| format!("decode configuration {}", path.display()));
    }
    let Some(path) = &tables.round_keys else {
        bail!("either --round-keys or --config is required");
    };
    let sbox = load_sbox(tables.sbox.as_deref(), tables.inv_sbox.as_deref())?;
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let round_keys =
        parse_round_keys(&text).with_context(|| format!("parse round keys {}", path.display()))?;
    Ok(CipherConfig::new(sbox, round_keys))
}

fn load_cipher(tables: &TableArgs) -> Result<Aes128> {
    load_config(tables).map(Aes128::new)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
