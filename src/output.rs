//! 终端输出
//!
//! 只负责展示搜索结果，不会把任何状态传回查找器。

use std::io::{self, Write};

use colored::*;

use crate::finder::{EntryType, SearchConfig, SearchOutcome};

const POINTER: &str = "█";

/// 打印搜索参数
pub fn print_header<W: Write>(out: &mut W, config: &SearchConfig) -> io::Result<()> {
    writeln!(out)?;
    print_field(out, "Pattern:", &config.pattern)?;
    print_field(out, "Directory:", &config.root_dir.display().to_string())?;
    print_field(out, "Type:", &config.type_filter.to_string())?;
    writeln!(out)
}

fn print_field<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        POINTER.blue(),
        label.blue().bold(),
        value.blue()
    )
}

/// 打印结果汇总和每条结果
pub fn print_outcome<W: Write>(
    out: &mut W,
    config: &SearchConfig,
    outcome: &SearchOutcome,
) -> io::Result<()> {
    if outcome.is_empty() {
        writeln!(out, "{} {}", "⚠".yellow().bold(), "No matches found".yellow())?;
        return writeln!(out);
    }

    writeln!(
        out,
        "{} {}",
        "✔".green().bold(),
        summary_line(outcome.len()).green()
    )?;
    if outcome.hit_limit {
        writeln!(
            out,
            "{}",
            format!(
                "Stopped at the limit of {} results (use -m to raise it)",
                config.max_results
            )
            .dimmed()
        )?;
    }
    writeln!(out, "\n{}", "------------------------".blue())?;

    for record in outcome {
        let label = match record.entry_type {
            EntryType::Directory => record.entry_type.label().cyan().bold(),
            EntryType::File => record.entry_type.label().cyan(),
        };
        writeln!(out, "{}\n{}\n", label, record.path.display())?;
    }

    Ok(())
}

/// 打印被跳过的目录
pub fn print_skipped<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    for skipped in &outcome.skipped {
        writeln!(
            out,
            "{} {}",
            "skipped:".yellow(),
            skipped.error.to_string().dimmed()
        )?;
    }
    Ok(())
}

/// "Found N result(s)"
pub fn summary_line(count: usize) -> String {
    format!("Found {} result{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::ResultRecord;

    fn render(config: &SearchConfig, outcome: &SearchOutcome) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_outcome(&mut buf, config, outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(1), "Found 1 result");
        assert_eq!(summary_line(3), "Found 3 results");
    }

    #[test]
    fn test_print_empty_outcome() {
        let config = SearchConfig::new("x", "/tmp");
        let text = render(&config, &SearchOutcome::default());
        assert!(text.contains("No matches found"));
    }

    #[test]
    fn test_print_records() {
        let config = SearchConfig::new("a", "/tmp");
        let outcome = SearchOutcome {
            results: vec![
                ResultRecord::new("/tmp/a.txt", EntryType::File),
                ResultRecord::new("/tmp/a", EntryType::Directory),
            ],
            ..Default::default()
        };

        let text = render(&config, &outcome);
        assert!(text.contains("Found 2 results"));
        assert!(text.contains("[FILE]\n/tmp/a.txt"));
        assert!(text.contains("[DIRECTORY]\n/tmp/a"));
        assert!(!text.contains("Stopped at the limit"));
    }
}
