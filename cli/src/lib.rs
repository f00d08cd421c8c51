//! ttcx CLI (made by FontLab https://www.fontlab.com/)

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use log::debug;

use ttcx_core::collection::{FaceInfo, FontCollection};
use ttcx_core::extract::save_face;
use ttcx_core::output::{write_json_pretty, write_ndjson};

/// Extract one face of a TTC/OTC collection into a standalone font.
#[derive(Debug, Parser)]
#[command(
    name = "ttcx",
    version,
    about = "Extract a single face from a TTC/OTC font collection (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Input collection (e.g. C:\Windows\Fonts\mingliu.ttc)
    #[arg(value_hint = ValueHint::FilePath)]
    collection: PathBuf,

    /// Output standalone font (e.g. assets/fonts/mingliu.ttf)
    #[arg(value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Index of the face to extract
    #[arg(long = "index", default_value_t = 0, allow_negative_numbers = true)]
    index: i64,

    /// Only list the faces in the collection; write nothing
    #[arg(long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// With --list, emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, requires = "list", conflicts_with = "ndjson")]
    json: bool,

    /// With --list, emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue, requires = "list")]
    ndjson: bool,

    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Argument problems the user can fix; these exit with status 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingInput(PathBuf),
    MissingOutput,
    IndexOutOfRange(i64),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingInput(path) => {
                write!(f, "錯誤：找不到檔案：{}", path.display())
            }
            UsageError::MissingOutput => {
                write!(f, "錯誤：未提供輸出檔案路徑。或改用 --list 先檢視字體清單。")
            }
            UsageError::IndexOutOfRange(index) => {
                write!(f, "錯誤：index 超出範圍：{index}（可用 --list 查看）")
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Map a failure to the process exit status: 2 for usage errors, 1 otherwise.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        2
    } else {
        1
    }
}

/// Text printed to stderr for a failure.
pub fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<UsageError>() {
        Some(usage) => usage.to_string(),
        None => format!("錯誤：{err:#}"),
    }
}

/// Parse CLI args and run.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, &mut handle)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // A logger may already be installed when embedded (e.g. in tests).
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn execute(cli: &Cli, mut out: impl Write) -> Result<()> {
    if !cli.collection.is_file() {
        return Err(UsageError::MissingInput(cli.collection.clone()).into());
    }

    let collection = FontCollection::open(&cli.collection)?;

    if cli.list {
        let faces = collection.faces()?;
        if cli.ndjson {
            write_ndjson(&faces, &mut out)?;
        } else if cli.json {
            write_json_pretty(&faces, &mut out)?;
        } else {
            write_listing(&faces, &mut out)?;
        }
        return Ok(());
    }

    let output = cli.output.as_ref().ok_or(UsageError::MissingOutput)?;
    let index = resolve_index(cli.index, collection.len())?;
    debug!(
        "extracting face {index} of {} into {}",
        collection.len(),
        output.display()
    );

    let written = save_face(&collection, index, output)?;
    writeln!(out, "完成：{}", written.display())?;
    Ok(())
}

fn resolve_index(raw: i64, face_count: u32) -> Result<u32, UsageError> {
    u32::try_from(raw)
        .ok()
        .filter(|index| *index < face_count)
        .ok_or(UsageError::IndexOutOfRange(raw))
}

fn write_listing(faces: &[FaceInfo], mut w: impl Write) -> Result<()> {
    writeln!(w, "共 {} 套字體：", faces.len())?;
    for face in faces {
        writeln!(w, "  [{}] {}", face.index, face.display_name())?;
    }
    Ok(())
}
