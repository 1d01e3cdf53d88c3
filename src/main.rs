use anyhow::{Context, Result};
use issuemark::{Config, DescriptionRenderer, Format, MarkdownRenderer, Submission, pages};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Reads the raw JSON submission from the configured input.
fn read_input(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read submission from standard input")?;
        return Ok(json);
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read submission: {}", config.input.display()))
}

/// Renders a submission in the requested output format.
fn render_output(config: &Config, submission: &Submission) -> String {
    let markdown = DescriptionRenderer::with_locale(config.locale).render_submission(submission);

    match config.format {
        Format::Markdown => markdown,
        Format::Html => MarkdownRenderer::new().render(&markdown),
        Format::Page => {
            let html = MarkdownRenderer::new().render(&markdown);
            pages::preview::generate(submission.title(), submission.kind().as_str(), &html)
                .into_string()
        }
    }
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("issuemark=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let json = read_input(&config)?;
    let submission =
        Submission::parse(config.kind, &json).context("Failed to parse submission")?;

    if submission.title().trim().is_empty() {
        tracing::warn!(kind = submission.kind().as_str(), "Submission has no title");
    }

    let output = render_output(&config, &submission);

    match &config.output {
        Some(path) => {
            if path.extension().and_then(|e| e.to_str()) != Some(config.format.extension()) {
                tracing::warn!(
                    path = %path.display(),
                    expected = config.format.extension(),
                    "Output extension does not match format"
                );
            }

            fs::write(path, &output)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                format = ?config.format,
                bytes = output.len(),
                "Description written"
            );

            if config.open {
                open::that(path)
                    .with_context(|| format!("Failed to open output: {}", path.display()))?;
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write to standard output")?;
        }
    }

    Ok(())
}
