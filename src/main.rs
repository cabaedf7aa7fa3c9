//! docit — translate documentation comments into Markdown.
//!
//! Two modes:
//!
//! - **stdin mode**: `docit -m app.js < app.js`
//! - **file mode**: `docit -o docs src/*.js` or `docit --dir src --include-files '\.js$'`

use anyhow::{bail, Context, Result};
use clap::Parser;
use docit::{create_renderer, DocIt, Settings};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(
    name = "docit",
    about = "Language independent translation of code comments into Markdown"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted and no --dir, reads from stdin.
    files: Vec<String>,

    /// Directory of commented code, processed recursively
    #[arg(short = 'd', long)]
    dir: Option<PathBuf>,

    /// Comma separated file name expressions selecting the files under --dir
    #[arg(short = 'i', long)]
    include_files: Option<String>,

    /// Output directory for generated files [default: md]
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// JSON file of settings overrides. May also set dir, out and includeFiles.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Override a single setting, e.g. --set includePrivate=true (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    set: Vec<(String, String)>,

    /// Module name for stdin input; picks the heading and code handler
    #[arg(short = 'm', long)]
    module_name: Option<String>,

    /// Output format: markdown (default) or json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Contents of a `--config` file: settings plus file mode options.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(flatten)]
    settings: Settings,
    dir: Option<PathBuf>,
    out: Option<PathBuf>,
    #[serde(rename = "includeFiles")]
    include_files: Option<String>,
}

/// File mode options after merging the config file with the command line.
struct FileOptions {
    dir: Option<PathBuf>,
    out: PathBuf,
    include_files: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let settings = config
        .settings
        .with_overrides(cli.set.iter().map(|(k, v)| (k, v.clone())))
        .context("invalid --set")?;
    let docit = DocIt::new(settings);

    let options = FileOptions {
        dir: cli.dir.clone().or(config.dir),
        out: cli
            .out
            .clone()
            .or(config.out)
            .unwrap_or_else(|| PathBuf::from("md")),
        include_files: cli.include_files.clone().or(config.include_files),
    };

    if cli.files.is_empty() && options.dir.is_none() {
        return stdin_mode(&cli, &docit);
    }

    file_mode(&cli, &docit, &options)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "docit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("malformed config file: {}", path.display()))
}

fn parse_key_value(arg: &str) -> std::result::Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))
}

/// stdin mode: read from stdin, write the rendered document to stdout.
fn stdin_mode(cli: &Cli, docit: &DocIt) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let module_name = cli.module_name.as_deref();
    let comments = docit.get_comments(&input, module_name)?;
    let renderer = create_renderer(&cli.format, docit.settings())?;
    print!("{}", renderer.render(&comments, module_name)?);
    Ok(())
}

/// file mode: translate every input into its own file under the output directory.
fn file_mode(cli: &Cli, docit: &DocIt, options: &FileOptions) -> Result<()> {
    let renderer = create_renderer(&cli.format, docit.settings())?;
    let ext = renderer.file_extension();

    // (source path, output path relative to the output directory)
    let mut inputs: Vec<(PathBuf, PathBuf)> = expand_globs(&cli.files)?
        .into_iter()
        .filter_map(|path| {
            let name = PathBuf::from(path.file_name()?);
            Some((path, name))
        })
        .collect();

    if let Some(ref dir) = options.dir {
        let include = parse_include_files(options.include_files.as_deref())?;
        for path in walk_dir(dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !include.is_empty() && !include.iter().any(|re| re.is_match(name)) {
                continue;
            }
            let rel = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
            inputs.push((path, rel));
        }
    }

    let targets = output_targets(&options.out, inputs, ext)?;

    fs::create_dir_all(&options.out).with_context(|| {
        format!("failed to create output directory: {}", options.out.display())
    })?;

    for (out_path, path) in targets {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable input");
                continue;
            }
        };

        let module_name = path.file_name().and_then(|n| n.to_str());
        let comments = docit
            .get_comments(&content, module_name)
            .with_context(|| format!("failed to process {}", path.display()))?;
        // Skip files without doc comments
        if comments.is_empty() {
            debug!(path = %path.display(), "no doc comments");
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&out_path, renderer.render(&comments, module_name)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!(source = %path.display(), output = %out_path.display(), "translated");
    }

    Ok(())
}

/// Expand glob patterns into a list of real file paths.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// All regular files below `dir`, sorted. Symbolic links are not followed.
fn walk_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Map each output file to its source. Two sources may not share an output.
fn output_targets(
    out_dir: &Path,
    inputs: Vec<(PathBuf, PathBuf)>,
    ext: &str,
) -> Result<BTreeMap<PathBuf, PathBuf>> {
    let mut targets: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
    for (path, rel) in inputs {
        let out_path = output_path(out_dir, &rel, ext);
        match targets.get(&out_path) {
            Some(existing) if *existing == path => {}
            Some(existing) => bail!(
                "{} and {} would both be written to {}",
                existing.display(),
                path.display(),
                out_path.display()
            ),
            None => {
                targets.insert(out_path, path);
            }
        }
    }
    Ok(targets)
}

/// `"\.js$, \.mjs$"` → two regexes. An absent or blank list selects every file.
fn parse_include_files(list: Option<&str>) -> Result<Vec<Regex>> {
    list.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| Regex::new(p).with_context(|| format!("invalid --include-files expression: {}", p)))
        .collect()
}

/// `src/app.js` under `md` → `md/src/app.md`
fn output_path(out_dir: &Path, rel: &Path, ext: &str) -> PathBuf {
    out_dir.join(rel).with_extension(ext)
}
