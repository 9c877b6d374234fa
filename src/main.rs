use anyhow::{bail, Context, Result};
use clap::Parser;
use codevista::app;
use codevista::engine::config::{Config, ThemeConfig, WindowConfig, WrapConfig};
use codevista::highlight::theme_names;
use codevista::input::{self, LoadedSource};
use codevista::rendering::{AnsiRenderer, InlineRenderer, RowRenderer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Render source code as a styled, word-wrapped terminal window.
#[derive(Parser, Debug)]
#[command(name = "codevista", version, about)]
struct Cli {
    /// Source file to render
    source: Option<PathBuf>,

    /// Read the source from the clipboard instead of a file
    #[arg(long, conflicts_with = "source")]
    clipboard: bool,

    /// Language name or file extension (default: from the file extension)
    #[arg(short, long)]
    language: Option<String>,

    /// Syntax highlighting theme
    #[arg(short, long, env = "CODEVISTA_THEME", default_value = ThemeConfig::DEFAULT_THEME)]
    theme: String,

    /// Column width to wrap code at
    #[arg(short, long, env = "CODEVISTA_COLUMNS", default_value_t = 80)]
    columns: usize,

    /// Keep only the last N rows
    #[arg(short, long)]
    rows: Option<usize>,

    /// Pad with empty rows up to --rows
    #[arg(long, requires = "rows")]
    pad_rows: bool,

    /// Blank columns around the code
    #[arg(long, default_value_t = 2)]
    padding: usize,

    /// Title shown next to the window buttons (default: the file name)
    #[arg(long)]
    title: Option<String>,

    /// Write the ANSI rendering to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Draw with an inline terminal viewport instead of plain ANSI output
    #[arg(long, conflicts_with = "output")]
    inline: bool,

    /// List the available themes and exit
    #[arg(long)]
    list_themes: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let title = self.title.clone().or_else(|| {
            self.source
                .as_ref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        });
        Config {
            wrap: WrapConfig {
                columns: self.columns,
            },
            window: WindowConfig {
                rows: self.rows,
                pad_rows: self.pad_rows,
                padding: self.padding,
                title,
            },
            theme: ThemeConfig {
                name: self.theme.clone(),
            },
        }
    }

    fn load(&self) -> Result<LoadedSource> {
        if self.clipboard {
            return input::clipboard::load().context("Failed to read source from clipboard");
        }
        match &self.source {
            Some(path) => input::file::load(path)
                .with_context(|| format!("Failed to load {}", path.display())),
            None => bail!("No source given: pass a file path or --clipboard"),
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("codevista=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_themes {
        for name in theme_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = cli.config();
    let source = cli.load()?;
    let snapshot = app::prepare(&source, cli.language.as_deref(), &config)
        .with_context(|| format!("Failed to render {}", source.origin))?;
    let frame = snapshot.frame(&config);

    let mut renderer: Box<dyn RowRenderer> = if cli.inline {
        Box::new(InlineRenderer::new(frame))
    } else if let Some(path) = &cli.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Box::new(AnsiRenderer::new(BufWriter::new(file), frame))
    } else {
        Box::new(AnsiRenderer::new(io::stdout().lock(), frame))
    };

    app::render(&snapshot, renderer.as_mut()).context("Failed to draw code window")?;
    Ok(())
}
