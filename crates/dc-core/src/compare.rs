//! Vector-file comparison driver.
//!
//! Pairs two line-oriented vector files positionally, scores each pair
//! with the selected measure, and appends one decimal line per result to
//! the output sink. Pairing stops at the shorter file's end. The engine
//! itself never logs and never performs I/O; everything file-shaped lives
//! here.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use dc_common::Measure;
use dc_math::{
    conditional_divergence, decision_cognizant_divergence, delta_divergence,
    kullback_leibler_divergence, DivergenceError,
};

use crate::error::{Error, Result};

/// Options for a comparison run.
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    /// Divergence measure applied to every pair.
    pub measure: Measure,

    /// Skip pairs that fail to parse or validate instead of aborting.
    pub skip_invalid: bool,
}

/// Accounting for a completed comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    /// Measure that was applied.
    pub measure: Measure,

    /// Pairs scored and written to the output.
    pub pairs_compared: usize,

    /// Pairs dropped by --skip-invalid.
    pub pairs_skipped: usize,

    /// Where the per-pair values were written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Parse one textual probability vector.
///
/// Accepts the list-of-floats literal the vector files use:
/// `[0.7, 0.2, 0.1]`. Parentheses work too, brackets may be omitted
/// entirely, and a trailing comma is tolerated. Returns the parse
/// failure reason on malformed input; never panics.
pub fn parse_vector_line(line: &str) -> std::result::Result<Vec<f64>, String> {
    let trimmed = line.trim();
    let inner = if let Some(body) = trimmed.strip_prefix('[') {
        body.strip_suffix(']')
            .ok_or_else(|| "missing closing ']'".to_string())?
    } else if let Some(body) = trimmed.strip_prefix('(') {
        body.strip_suffix(')')
            .ok_or_else(|| "missing closing ')'".to_string())?
    } else {
        trimmed
    };

    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    let mut values = Vec::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() {
            // A single empty tail is a trailing comma; anything else is a hole
            if i == fields.len() - 1 {
                break;
            }
            return Err(format!("empty element at position {}", i));
        }
        let value: f64 = field
            .parse()
            .map_err(|e| format!("invalid float {:?}: {}", field, e))?;
        values.push(value);
    }
    Ok(values)
}

/// Evaluate the selected measure for one vector pair.
///
/// The conditional score never validates and therefore never errors; the
/// other measures surface their precondition failures.
pub fn evaluate_measure(
    measure: Measure,
    p: &[f64],
    pt: &[f64],
) -> std::result::Result<f64, DivergenceError> {
    match measure {
        Measure::Kl => kullback_leibler_divergence(p, pt),
        Measure::Dckl => decision_cognizant_divergence(p, pt),
        Measure::Delta => delta_divergence(p, pt),
        Measure::If => Ok(conditional_divergence(p, pt)),
    }
}

/// Score one parsed pair, attaching line context to engine failures.
fn score_pair(measure: Measure, p: &[f64], pt: &[f64], line: usize) -> Result<f64> {
    evaluate_measure(measure, p, pt).map_err(|source| Error::Divergence { line, source })
}

/// Run the comparison loop over two line sources and a sink.
///
/// Lines are paired positionally; the loop ends at the shorter source.
/// I/O failures always abort the run. Parse and validation failures
/// abort by default, or are logged and counted when `skip_invalid` is
/// set.
pub fn run_compare<A: BufRead, B: BufRead, W: Write>(
    vectors1: A,
    vectors2: B,
    sink: &mut W,
    opts: &CompareOptions,
) -> Result<CompareReport> {
    let mut report = CompareReport {
        measure: opts.measure,
        pairs_compared: 0,
        pairs_skipped: 0,
        output: None,
    };

    for (idx, (line1, line2)) in vectors1.lines().zip(vectors2.lines()).enumerate() {
        let line_no = idx + 1;
        let (line1, line2) = (line1?, line2?);

        let scored = parse_vector_line(&line1)
            .and_then(|p| parse_vector_line(&line2).map(|pt| (p, pt)))
            .map_err(|reason| Error::Parse {
                line: line_no,
                reason,
            })
            .and_then(|(p, pt)| score_pair(opts.measure, &p, &pt, line_no));

        match scored {
            Ok(value) => {
                writeln!(sink, "{}", value)?;
                report.pairs_compared += 1;
            }
            Err(err) if opts.skip_invalid && !matches!(err, Error::Io(_)) => {
                tracing::warn!("skipping pair at line {}: {}", line_no, err);
                report.pairs_skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

/// Default output path: the first input with a `.div` suffix appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".div");
    PathBuf::from(os)
}

/// Compare two vector files and write one value per pair.
///
/// The output path defaults to `<vectors1>.div` next to the first input.
pub fn compare_files(
    vectors1: &Path,
    vectors2: &Path,
    output: Option<&Path>,
    opts: &CompareOptions,
) -> Result<CompareReport> {
    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(vectors1));

    tracing::debug!(
        "comparing {} vs {} with measure {}",
        vectors1.display(),
        vectors2.display(),
        opts.measure
    );

    let reader1 = BufReader::new(File::open(vectors1).map_err(|source| Error::Open {
        path: vectors1.to_path_buf(),
        source,
    })?);
    let reader2 = BufReader::new(File::open(vectors2).map_err(|source| Error::Open {
        path: vectors2.to_path_buf(),
        source,
    })?);
    let mut writer = BufWriter::new(File::create(&out_path).map_err(|source| Error::Create {
        path: out_path.clone(),
        source,
    })?);

    let mut report = run_compare(reader1, reader2, &mut writer, opts)?;
    writer.flush()?;
    report.output = Some(out_path);

    tracing::info!(
        "{}: {} pairs compared, {} skipped",
        opts.measure,
        report.pairs_compared,
        report.pairs_skipped
    );
    Ok(report)
}
