//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RhymerArgs};
use crate::engine::AnalysisResult;
use crate::error::Result;
use crate::phonetic::tail::RhymeTail;

/// Analysis of one input, tagged with where it came from.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// How a single word resolves.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonesReport {
    pub word: String,
    pub cleaned: String,
    pub phones: Vec<String>,
    #[serde(flatten)]
    pub tail: RhymeTail,
    pub bucket_key: String,
}

/// Output analysis reports in the configured format.
pub fn output_reports(reports: &[SourceReport], args: &RhymerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => match reports {
            [single] => output_json(&single.result, args),
            _ => output_json(&reports, args),
        },
        OutputFormat::Human => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let headed = reports.len() > 1;
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                if headed {
                    writeln!(out, "{}:", report.source)?;
                    writeln!(out, "{}", "═".repeat(report.source.chars().count() + 1))?;
                }
                write_analysis_human(&mut out, &report.result)?;
            }
            Ok(())
        }
    }
}

/// Output phoneme reports in the configured format.
pub fn output_phones(reports: &[PhonesReport], args: &RhymerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&reports, args),
        OutputFormat::Human => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for report in reports {
                write_phones_human(&mut out, report)?;
            }
            Ok(())
        }
    }
}

/// Render one analysis for people.
pub fn write_analysis_human<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    if result.is_empty() {
        return writeln!(out, "Nothing to analyze.");
    }

    writeln!(out, "Rhyme map: {}", result.scheme)?;
    writeln!(out)?;

    if result.rhyme_groups.is_empty() {
        writeln!(out, "No rhyme clusters at current cutoffs.")?;
    } else {
        writeln!(out, "Rhyme clusters:")?;
        writeln!(out, "═══════════════")?;
        for (i, group) in result.rhyme_groups.iter().enumerate() {
            let words: Vec<String> = group
                .iter()
                .map(|m| {
                    let span = &result.spans[m];
                    let place = if span.is_line_end { "end" } else { "internal" };
                    format!("{} (line {}, {place})", span.word, span.line + 1)
                })
                .collect();
            writeln!(out, "Cluster {}: {}", i + 1, words.join(", "))?;
        }
    }

    if !result.assonance_clusters.is_empty() {
        writeln!(out)?;
        writeln!(out, "Vowel echo clusters:")?;
        writeln!(out, "════════════════════")?;
        for (i, cluster) in result.assonance_clusters.iter().enumerate() {
            let vowel = cluster
                .iter()
                .next()
                .and_then(|m| result.spans[m].nucleus())
                .unwrap_or("_");
            writeln!(
                out,
                "Echo {} [{vowel}]: {}",
                i + 1,
                result.cluster_words(cluster).join(", ")
            )?;
        }
    }

    Ok(())
}

/// Render one word's phonemes for people.
pub fn write_phones_human<W: Write>(out: &mut W, report: &PhonesReport) -> io::Result<()> {
    if report.phones.is_empty() {
        return writeln!(out, "{}: (no letters)", report.word);
    }
    writeln!(
        out,
        "{} -> {}: nucleus {}, coda [{}], bucket {}",
        report.word,
        report.phones.join(" "),
        report.tail.nucleus.as_deref().unwrap_or("-"),
        report.tail.coda.join(" "),
        report.bucket_key
    )
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &RhymerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::engine::analyze;

    fn render(text: &str, config: &AnalyzerConfig) -> String {
        let result = analyze(text, config).unwrap();
        let mut buf = Vec::new();
        write_analysis_human(&mut buf, &result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_analysis() {
        let text = render("cat\nhat\ndog\nlog", &AnalyzerConfig::default().with_assonance(false));

        assert!(text.starts_with("Rhyme map: A A B B\n"));
        assert!(text.contains("Cluster 1: cat (line 1, end), hat (line 2, end)"));
        assert!(text.contains("Cluster 2: dog (line 3, end), log (line 4, end)"));
        assert!(!text.contains("Vowel echo"));
    }

    #[test]
    fn test_human_no_clusters() {
        let text = render("cat\ndog", &AnalyzerConfig::default());
        assert!(text.contains("Rhyme map: - -"));
        assert!(text.contains("No rhyme clusters at current cutoffs."));
    }

    #[test]
    fn test_human_blank() {
        assert_eq!(render("  \n", &AnalyzerConfig::default()), "Nothing to analyze.\n");
    }

    #[test]
    fn test_human_phones() {
        let phones = vec!["K".to_string(), "AE1".to_string(), "T".to_string()];
        let tail = RhymeTail::from_phones(&phones);
        let report = PhonesReport {
            word: "Cat!".into(),
            cleaned: "cat".into(),
            bucket_key: tail.bucket_key(),
            phones,
            tail,
        };
        let mut buf = Vec::new();
        write_phones_human(&mut buf, &report).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Cat! -> K AE1 T: nucleus AE, coda [T], bucket AE|T\n"
        );
    }

    #[test]
    fn test_source_report_json() {
        let report = SourceReport {
            source: "poem.txt".into(),
            result: analyze("cat\nhat", &AnalyzerConfig::default()).unwrap(),
        };
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["source"], "poem.txt");
        assert_eq!(value["scheme"], serde_json::json!(["A", "A"]));
    }
}
