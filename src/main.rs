use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use readiness_report::{AssessmentReport, ReportComposer, ReportConfig};

/// Renders an HR readiness assessment (JSON) to a paginated PDF report.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Assessment result as JSON.
    input: PathBuf,

    /// Directory the PDF is written to.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Generation date printed in the report (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Write the PDF to standard output instead of a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Leave out the "Page X of Y" folio.
    #[arg(long)]
    no_folio: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let json = std::fs::read_to_string(&cli.input)?;
    let report = AssessmentReport::from_json(&json)?;

    let mut config = ReportConfig::default();
    config.geometry.folio = !cli.no_folio;
    let composer = ReportComposer::new(config);
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let generated = readiness_report::generate_report_pdf_with(&composer, &report, date)?;
    if cli.stdout {
        std::io::stdout().lock().write_all(&generated.bytes)?;
        return Ok(());
    }

    let path = readiness_report::write_report(&generated, &cli.output)?;
    println!(
        "Wrote {} ({} page{})",
        path.display(),
        generated.page_count,
        if generated.page_count == 1 { "" } else { "s" }
    );
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
