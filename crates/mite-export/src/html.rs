//! Self-contained HTML report.

use std::fmt::Write;

use crate::Renderer;
use crate::error::ExportError;
use crate::report::{EnzymeCard, ReactionCard, ReleaseCard, Report};

const STYLE: &str = "body{font-family:sans-serif;max-width:72rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.3rem .5rem;text-align:left;vertical-align:top}\
code{word-break:break-all}";

/// Renders a [`Report`] as one HTML page with inline styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, report: &Report) -> Result<String, ExportError> {
        let mut out = String::new();
        let title = escape(&report.accession);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(
            out,
            "<head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>"
        )?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{title}</h1>")?;
        writeln!(
            out,
            "<p>Status: <strong>{}</strong> &middot; Quality: <strong>{}</strong></p>",
            escape(&report.status),
            escape(&report.quality)
        )?;
        if !report.retirement_reasons.is_empty() {
            writeln!(
                out,
                "<p>Retired: {}</p>",
                join_escaped(&report.retirement_reasons)
            )?;
        }
        if !report.tailoring.is_empty() {
            writeln!(out, "<p>Tailoring: {}</p>", join_escaped(&report.tailoring))?;
        }

        write_enzyme(&mut out, &report.enzyme)?;
        for reaction in &report.reactions {
            write_reaction(&mut out, reaction)?;
        }
        write_changelog(&mut out, &report.releases)?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        tracing::trace!(accession = %report.accession, bytes = out.len(), "rendered html report");
        Ok(out)
    }
}

fn write_enzyme(out: &mut String, enzyme: &EnzymeCard) -> std::fmt::Result {
    writeln!(out, "<section id=\"enzyme\">")?;
    writeln!(out, "<h2>Enzyme: {}</h2>", escape(&enzyme.name))?;
    if let Some(description) = &enzyme.description {
        writeln!(out, "<p>{}</p>", escape(description))?;
    }
    if !enzyme.database_ids.is_empty() {
        writeln!(out, "<p>Database IDs: {}</p>", join_escaped(&enzyme.database_ids))?;
    }
    if !enzyme.references.is_empty() {
        writeln!(out, "<p>References: {}</p>", join_escaped(&enzyme.references))?;
    }
    if !enzyme.auxiliary.is_empty() {
        writeln!(out, "<h3>Auxiliary enzymes</h3>")?;
        writeln!(
            out,
            "<table><tr><th>Name</th><th>Description</th><th>Database IDs</th></tr>"
        )?;
        for aux in &enzyme.auxiliary {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&aux.name),
                aux.description.as_deref().map(escape).unwrap_or_default(),
                join_escaped(&aux.database_ids)
            )?;
        }
        writeln!(out, "</table>")?;
    }
    writeln!(out, "</section>")
}

fn write_reaction(out: &mut String, reaction: &ReactionCard) -> std::fmt::Result {
    writeln!(out, "<section class=\"reaction\">")?;
    writeln!(out, "<h2>Reaction {}</h2>", reaction.number)?;
    if !reaction.tailoring.is_empty() {
        writeln!(out, "<p>Tailoring: {}</p>", join_escaped(&reaction.tailoring))?;
    }
    if let Some(smarts) = &reaction.smarts {
        writeln!(
            out,
            "<p>Reaction SMARTS{}: <code>{}</code></p>",
            if reaction.is_iterative { " (iterative)" } else { "" },
            escape(smarts)
        )?;
    }

    if !reaction.examples.is_empty() {
        writeln!(
            out,
            "<table><tr><th>Substrate</th><th>Products</th><th>Balanced</th><th>Intermediate</th></tr>"
        )?;
        for example in &reaction.examples {
            writeln!(
                out,
                "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
                escape(&example.substrate),
                example
                    .products
                    .iter()
                    .map(|product| escape(product))
                    .collect::<Vec<_>>()
                    .join("</code><br><code>"),
                yes_no(example.is_balanced),
                yes_no(example.is_intermediate)
            )?;
        }
        writeln!(out, "</table>")?;
    }

    if !reaction.evidence.is_empty() {
        writeln!(out, "<h3>Evidence</h3>")?;
        writeln!(out, "<ul>")?;
        for evidence in &reaction.evidence {
            write!(out, "<li>{}", join_escaped(&evidence.codes))?;
            if !evidence.references.is_empty() {
                write!(out, " ({})", join_escaped(&evidence.references))?;
            }
            writeln!(out, "</li>")?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(out, "</section>")
}

fn write_changelog(out: &mut String, releases: &[ReleaseCard]) -> std::fmt::Result {
    if releases.is_empty() {
        return Ok(());
    }
    writeln!(out, "<section id=\"changelog\">")?;
    writeln!(out, "<h2>Changelog</h2>")?;
    for release in releases {
        writeln!(
            out,
            "<h3>{} ({})</h3>",
            escape(&release.version),
            escape(&release.date)
        )?;
        writeln!(out, "<ul>")?;
        for change in &release.changes {
            writeln!(
                out,
                "<li>{}: {} (contributors: {}; reviewers: {})</li>",
                escape(&change.date),
                escape(&change.comment),
                join_escaped(&change.contributors),
                join_escaped(&change.reviewers)
            )?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(out, "</section>")
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn join_escaped(values: &[String]) -> String {
    values
        .iter()
        .map(|value| escape(value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("embB", "embB")]
    #[case("[#6]>>[#6]", "[#6]&gt;&gt;[#6]")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("A & \"B\"", "A &amp; &quot;B&quot;")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[test]
    fn yes_no_labels() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
