//! Extract command - pull metadata out of a single press release.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bookmeta_core::extract::{BookParser, MetadataExtractor};
use bookmeta_core::doc::{check_export_body, DocLink};
use bookmeta_core::{DocError, ExtractedBookInfo};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (plain-text export of the press release)
    input: Option<PathBuf>,

    /// Shared document URL to fetch instead of a local file
    #[arg(short, long, conflicts_with = "input")]
    url: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Merge extracted fields into an existing JSON record, filling only
    /// fields that are still empty there
    #[arg(long, value_name = "FILE")]
    merge_into: Option<PathBuf>,

    /// List fields that could not be extracted
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let text = match (&args.input, &args.url) {
        (Some(path), None) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Reading press release from {}", path.display());
            fs::read_to_string(path)?
        }
        (None, Some(url)) => fetch_document_text(url).await?,
        _ => anyhow::bail!("Provide either an input file or --url"),
    };

    let extractor = MetadataExtractor::with_config(&config);
    let report = extractor.parse(&text);

    let book = if let Some(merge_path) = &args.merge_into {
        let existing = fs::read_to_string(merge_path)?;
        let mut record: ExtractedBookInfo = serde_json::from_str(&existing)?;
        report.book.merge_into(&mut record);
        fs::write(merge_path, serde_json::to_string_pretty(&record)?)?;
        println!(
            "{} Merged extracted fields into {}",
            style("✓").green(),
            merge_path.display()
        );
        record
    } else {
        report.book
    };

    let output = format_book(&book, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !report.warnings.is_empty() {
        eprintln!("{}", style("Missing fields:").yellow());
        for warning in &report.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Validate the link shape, then fetch the plain-text export.
///
/// Rejection of a malformed link happens before any network call; a
/// non-success status and an empty body are surfaced as distinct errors.
pub async fn fetch_document_text(url: &str) -> anyhow::Result<String> {
    let link = DocLink::parse(url)?;
    let export_url = link.export_url();

    info!("Fetching document text from {}", export_url);

    let response = reqwest::get(&export_url)
        .await
        .map_err(|e| DocError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocError::Status(status.as_u16()).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| DocError::Fetch(e.to_string()))?;
    check_export_body(&body)?;

    Ok(body)
}

pub fn format_book(book: &ExtractedBookInfo, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(book)?),
        OutputFormat::Csv => format_csv(book),
        OutputFormat::Text => Ok(format_text(book)),
    }
}

fn format_csv(book: &ExtractedBookInfo) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "title",
        "author",
        "category",
        "price",
        "isbn",
        "page_count",
        "book_size",
        "publication_date",
    ])?;

    wtr.write_record([
        &book.title,
        &book.author,
        &book.category,
        &book.price,
        &book.isbn,
        &book.page_count,
        &book.book_size,
        &book.publication_date,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(book: &ExtractedBookInfo) -> String {
    let mut output = String::new();

    let scalar_fields = [
        ("Title", &book.title),
        ("Author", &book.author),
        ("Category", &book.category),
        ("Price", &book.price),
        ("ISBN", &book.isbn),
        ("Pages", &book.page_count),
        ("Trim size", &book.book_size),
        ("Published", &book.publication_date),
    ];

    for (label, value) in scalar_fields {
        if !value.is_empty() {
            output.push_str(&format!("{}: {}\n", label, value));
        }
    }

    let sections = [
        ("Description", &book.description),
        ("Publisher review", &book.publisher_review),
        ("Testimonials", &book.testimonials),
        ("Table of contents", &book.table_of_contents),
        ("Author bio", &book.author_bio),
    ];

    for (label, value) in sections {
        if !value.is_empty() {
            output.push_str(&format!("\n{} ({} chars):\n{}\n", label, value.chars().count(), value));
        }
    }

    if output.is_empty() {
        output.push_str("No fields could be extracted.\n");
    }

    output
}
