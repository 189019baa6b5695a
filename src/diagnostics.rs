//! Rendering of document errors as source-annotated reports.

use std::ops::Range;

use ariadne::{Color, Fmt, Label, Report, ReportKind};
use jsondoc::{ParseError, Value};

pub type DiagnosticReport<'a> = Report<'a, (&'a String, Range<usize>)>;

/// Clamp a label to the source, so errors reported at end of input still point somewhere.
fn label_range(src: &str, range: Range<usize>) -> Range<usize> {
    let len = src.chars().count();
    if range.start >= len {
        len..len
    } else {
        range
    }
}

pub fn parse_error<'a>(path: &'a String, src: &str, err: &ParseError) -> DiagnosticReport<'a> {
    let range = label_range(src, err.span().into_range());
    Report::build(ReportKind::Error, path, range.start)
        .with_message("failed to parse diagram document")
        .with_label(
            Label::new((path, range))
                .with_message(err.kind.to_string())
                .with_color(Color::Red),
        )
        .finish()
}

pub fn top_level_not_object<'a>(
    path: &'a String,
    src: &str,
    value: &Value,
) -> DiagnosticReport<'a> {
    let start = src
        .chars()
        .position(|c| !c.is_ascii_whitespace())
        .unwrap_or(0);
    let range = label_range(src, start..start + 1);
    Report::build(ReportKind::Error, path, range.start)
        .with_message(format!(
            "unexpected top level JSON kind: expected {} but found {}",
            Value::OBJECT.fg(Color::Blue),
            value.kind_desc().fg(Color::Blue)
        ))
        .with_label(Label::new((path, range)).with_color(Color::Red))
        .with_help("a diagram document is a single JSON object")
        .finish()
}

#[cfg(test)]
mod tests {
    use ariadne::Source;

    use super::*;

    fn render<'a>(report: DiagnosticReport<'a>, path: &'a String, src: &str) -> String {
        let mut out = Vec::new();
        report.write((path, Source::from(src)), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_label_range_clamps_end_of_input() {
        assert_eq!(label_range("[1,", 3..4), 3..3);
        assert_eq!(label_range("[1,x]", 3..4), 3..4);
    }

    #[test]
    fn test_parse_error_report_mentions_reason() {
        let path = "doc.json".to_string();
        let src = "{\"a\":}";
        let err = jsondoc::parse(src).unwrap_err();
        let out = render(parse_error(&path, src, &err), &path, src);
        assert!(out.contains("failed to parse diagram document"));
        assert!(out.contains("expected a value"));
    }

    #[test]
    fn test_report_at_end_of_input() {
        let path = "doc.json".to_string();
        let src = "[1,";
        let err = jsondoc::parse(src).unwrap_err();
        let out = render(parse_error(&path, src, &err), &path, src);
        assert!(out.contains("unexpected end of input"));
    }

    #[test]
    fn test_top_level_not_object() {
        let path = "doc.json".to_string();
        let src = "  [1]";
        let value = jsondoc::parse(src).unwrap();
        let out = render(top_level_not_object(&path, src, &value), &path, src);
        assert!(out.contains("unexpected top level JSON kind"));
    }
}
