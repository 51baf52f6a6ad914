use clap::Parser;
use std::path::PathBuf;
use weft::{config::Config, output, walk};

#[derive(Parser)]
#[command(name = "weft")]
#[command(version)]
#[command(about = "Static site generator: markdown in, indexed HTML out")]
#[command(long_about = "\
Static site generator: markdown in, indexed HTML out

Walks the source directory, converts every .md file to HTML through the
page template, and writes one index.html per directory listing its
subdirectories and pages. The output tree mirrors the source tree.

  src/                      html/
  ├── a.md                  ├── a.html
  └── sub/                  ├── index.html
      └── b.md              └── sub/
                                ├── b.html
                                └── index.html

.git directories are skipped. Pass -t to replace the built-in template
with your own Tera template; pass --copy-style to copy src/style.css to
the output root after the walk.")]
struct Cli {
    /// Source directory containing markdown files
    #[arg(short = 's', long = "source", default_value = "./src")]
    source: PathBuf,

    /// Output directory for generated HTML files
    #[arg(short = 'o', long = "output", default_value = "./html")]
    output: PathBuf,

    /// Custom template file overriding the embedded default
    #[arg(short = 't', long = "template")]
    template: Option<PathBuf>,

    /// Copy style.css from the source root to the output root
    #[arg(long = "copy-style")]
    copy_style: bool,
}

fn main() {
    let cli = Cli::parse();
    output::print_banner(env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&cli) {
        eprintln!("{}", output::format_fatal(&err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(template) = &cli.template {
        output::print_template_notice(template);
    }

    let config = Config::load(
        &cli.source,
        &cli.output,
        cli.template.as_deref(),
        cli.copy_style,
    )?;

    let summary = walk::walk(&config)?;
    output::print_summary(&summary);
    Ok(())
}
