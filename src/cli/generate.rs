use anyhow::{Context, Result};

use checkit::domain::DocumentKind;
use checkit::engine::generate;
use checkit::output::{format_generated, OutputFormat};

pub fn run_generate(
    kind: DocumentKind,
    brand: Option<&str>,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    if count == 0 {
        anyhow::bail!("--count must be at least 1");
    }

    let values = (0..count)
        .map(|_| generate(kind, brand))
        .collect::<checkit::Result<Vec<_>>>()
        .with_context(|| format!("Failed to generate {kind}"))?;

    print!("{}", format_generated(kind, &values, format));
    Ok(())
}
