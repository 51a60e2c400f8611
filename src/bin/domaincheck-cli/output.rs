use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use crate::args::Cli;
use domaincheck_lib::{DomainError, NormalizedDomain};

pub fn any_invalid(rows: &[NormalizedDomain]) -> bool {
    rows.iter().any(|row| !row.valid)
}

/// 0 si tout est valide, 2 sinon ; les erreurs fatales (1) passent par `Err`.
pub fn exit_code(rows: &[NormalizedDomain]) -> i32 {
    if any_invalid(rows) { 2 } else { 0 }
}

pub fn write_reports(rows: &[NormalizedDomain], cli: &Cli) -> Result<()> {
    let bytes = render_reports(rows, cli)?;
    emit(&bytes, cli.out.as_deref())
}

pub fn write_codes(cli: &Cli) -> Result<()> {
    let bytes = render_codes(&cli.format)?;
    emit(&bytes, cli.out.as_deref())
}

pub fn render_reports(rows: &[NormalizedDomain], cli: &Cli) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match cli.format.as_str() {
        "human" => write_human(&mut buf, rows, cli.codes)?,
        "json" => write_json(&mut buf, rows)?,
        "ndjson" => write_ndjson(&mut buf, rows)?,
        "csv" => write_csv(&mut buf, rows)?,
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
    Ok(buf)
}

pub fn render_codes(format: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        "human" => {
            for err in DomainError::ALL {
                writeln!(buf, "{:<18} {}", err.code(), err)?;
            }
        }
        "json" => write_codes_json(&mut buf)?,
        other => bail!("format '{other}' non supporté pour `codes`, utilisez human|json"),
    }
    Ok(buf)
}

fn emit(bytes: &[u8], out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => write_all_atomically(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn display_input(row: &NormalizedDomain) -> &str {
    row.original.as_deref().unwrap_or("<none>")
}

fn write_human<W: Write>(w: &mut W, rows: &[NormalizedDomain], codes: bool) -> Result<()> {
    for row in rows {
        if row.valid {
            writeln!(w, "[OK]    {}", display_input(row))?;
            continue;
        }
        let detail = if codes {
            let codes: Vec<&str> = row.errors.iter().map(|e| e.code()).collect();
            codes.join("; ")
        } else {
            row.reasons.join("; ")
        };
        writeln!(w, "[INVALID] {} :: {}", display_input(row), detail)?;
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
#[derive(serde::Serialize)]
struct CodeEntry {
    code: &'static str,
    message: String,
}

#[cfg(feature = "with-serde")]
fn write_codes_json<W: Write>(w: &mut W) -> Result<()> {
    let entries: Vec<CodeEntry> = DomainError::ALL
        .iter()
        .map(|err| CodeEntry {
            code: err.code(),
            message: err.message(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *w, &entries)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_codes_json<W: Write>(_: &mut W) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_json<W: Write>(w: &mut W, rows: &[NormalizedDomain]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, rows)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json<W: Write>(_: &mut W, _: &[NormalizedDomain]) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson<W: Write>(w: &mut W, rows: &[NormalizedDomain]) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *w, row)?;
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson<W: Write>(_: &mut W, _: &[NormalizedDomain]) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv<W: Write>(w: &mut W, rows: &[NormalizedDomain]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.write_record(csv_record(row))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv<W: Write>(_: &mut W, _: &[NormalizedDomain]) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &NormalizedDomain) -> Vec<String> {
    let codes: Vec<&str> = row.errors.iter().map(|e| e.code()).collect();
    vec![
        row.original.clone().unwrap_or_default(),
        row.domain.clone(),
        row.tld.clone().unwrap_or_default(),
        row.valid.to_string(),
        codes.join("|"),
        row.reasons.join("|"),
    ]
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use domaincheck_lib::normalize_domain;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["domaincheck-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid args")
    }

    fn rows() -> Vec<NormalizedDomain> {
        vec![
            normalize_domain(Some("example.com")),
            normalize_domain(Some("Example..123")),
        ]
    }

    #[test]
    fn exit_codes() {
        let rows = rows();
        assert_eq!(exit_code(&rows[..1]), 0);
        assert_eq!(exit_code(&rows), 2);
        assert_eq!(exit_code(&[]), 0);
        assert!(any_invalid(&rows));
    }

    #[test]
    fn human_lines_with_messages() {
        let out = render_reports(&rows(), &cli(&["--stdin"])).expect("human output");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[OK]    example.com\n\
             [INVALID] Example..123 :: Domain label contains an illegal character; \
             The top-level domain (TLD) cannot be numerical\n"
        );
    }

    #[test]
    fn human_lines_with_codes() {
        let out = render_reports(&rows(), &cli(&["--stdin", "--codes"])).expect("human output");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[OK]    example.com\n[INVALID] Example..123 :: illegal_chars; top_numerical\n"
        );
    }

    #[test]
    fn absent_input_is_displayed_as_placeholder() {
        let mut buf = Vec::new();
        write_human(&mut buf, &[normalize_domain(None)], true).expect("write");
        assert_eq!(buf, b"[INVALID] <none> :: zero_size\n");
    }

    #[test]
    fn unknown_format_is_fatal() {
        assert!(render_reports(&rows(), &cli(&["--format", "xml"])).is_err());
        assert!(render_codes("csv").is_err());
    }

    #[cfg(not(feature = "with-serde"))]
    #[test]
    fn json_without_serde_is_fatal() {
        assert!(render_reports(&rows(), &cli(&["--format", "json"])).is_err());
        assert!(render_codes("json").is_err());
    }

    #[test]
    fn codes_listing_covers_registry() {
        let out = String::from_utf8(render_codes("human").expect("codes")).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), DomainError::ALL.len());
        assert_eq!(lines[0], "zero_size          Zero-length domain name");
        assert!(lines[11].starts_with("bogus_tld "));
    }

    #[test]
    fn out_file_is_written_atomically() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let path = path.to_str().expect("utf8 path");

        let cli = cli(&["--stdin", "--codes", "--out", path]);
        write_reports(&rows(), &cli).expect("write report");

        let written = std::fs::read_to_string(path).expect("read report");
        assert!(written.ends_with("[INVALID] Example..123 :: illegal_chars; top_numerical\n"));
        assert!(!std::path::Path::new(&format!("{path}.tmp")).exists());
    }

    #[test]
    fn codes_honour_out_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("codes.txt");
        let path = path.to_str().expect("utf8 path");

        write_codes(&cli(&["--out", path, "codes"])).expect("write codes");
        let written = std::fs::read_to_string(path).expect("read codes");
        assert_eq!(written.lines().count(), DomainError::ALL.len());
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn ndjson_one_row_per_line() {
        let out = render_reports(&rows(), &cli(&["--format", "ndjson"])).expect("ndjson");
        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["valid"], true);
        assert_eq!(
            lines[1]["errors"],
            serde_json::json!(["illegal_chars", "top_numerical"])
        );
    }

    #[cfg(feature = "with-csv")]
    #[test]
    fn csv_record_columns() {
        let row = normalize_domain(Some("Example.123"));
        assert_eq!(
            csv_record(&row),
            vec![
                "Example.123".to_string(),
                "example.123".to_string(),
                "123".to_string(),
                "false".to_string(),
                "top_numerical".to_string(),
                "The top-level domain (TLD) cannot be numerical".to_string(),
            ]
        );
    }
}
