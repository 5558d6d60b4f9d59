//! Output formatting for search responses.
//!
//! Four renderings: `markdown` (default, full detail), `summary` (one line
//! per result), `code-only` (extracted code examples), and `json` (the
//! envelope itself). Error envelopes render as a single `Error:` line in
//! the text formats and keep their `error` field in JSON.

use anyhow::Result;

use crate::models::{first_field, SearchResponse};

/// Columns holding a result's display name, in preference order.
const NAME_COLS: &[&str] = &["Pattern", "Component", "Style", "Guideline", "Animation Type"];

/// Columns holding positive and negative code examples.
const CODE_GOOD_COLS: &[&str] = &["Code Good", "SwiftUI API", "SwiftUI Implementation"];
const CODE_BAD_COLS: &[&str] = &["Code Bad", "Compose API", "Compose Implementation"];

/// Values longer than this are cut in markdown output.
const MAX_VALUE_CHARS: usize = 300;

/// Render a response in the requested format.
///
/// Unrecognized format names fall back to markdown, mirroring the CLI's
/// default; the CLI validates the flag before we get here.
pub fn render(response: &SearchResponse, format: &str) -> Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(response)?);
    }

    if let Some(error) = &response.error {
        return Ok(format!("Error: {}", error));
    }

    Ok(match format {
        "summary" => format_summary(response),
        "code-only" => format_code_only(response),
        _ => format_markdown(response),
    })
}

fn format_markdown(response: &SearchResponse) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(stack) = &response.stack {
        out.push("## Stack Guidelines".to_string());
        out.push(format!("**Stack:** {} | **Query:** {}", stack, response.query));
    } else if let Some(domains) = &response.domains {
        out.push("## Multi-Domain Search".to_string());
        out.push(format!(
            "**Domains:** {} | **Query:** {}",
            domains.join(", "),
            response.query
        ));
    } else {
        out.push("## Search Results".to_string());
        out.push(format!(
            "**Domain:** {} | **Query:** {}",
            response.domain.as_deref().unwrap_or("-"),
            response.query
        ));
    }

    if let Some(platform) = &response.platform {
        out.push(format!("**Platform Filter:** {}", platform));
    }

    out.push(format!(
        "**Source:** {} | **Found:** {} results\n",
        response.file.as_deref().unwrap_or("multiple"),
        response.count
    ));

    for (i, row) in response.results.iter().enumerate() {
        let domain_tag = match row.get("_domain").and_then(|v| v.as_str()) {
            Some(domain) => format!(" [{}]", domain),
            None => String::new(),
        };
        out.push(format!("### Result {}{}", i + 1, domain_tag));

        for (key, value) in row {
            if key.starts_with('_') {
                continue;
            }
            let value = value.as_str().unwrap_or_default();
            out.push(format!("- **{}:** {}", key, truncate_value(value)));
        }
        out.push(String::new());
    }

    out.join("\n")
}

fn format_summary(response: &SearchResponse) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push(format!("## Search: {}", response.query));
    out.push(format!("Found {} results\n", response.count));

    for (i, row) in response.results.iter().enumerate() {
        let name = first_field(row, NAME_COLS).unwrap_or("Result");
        let platform = row.get("Platform").and_then(|v| v.as_str()).unwrap_or("");
        out.push(format!("{}. **{}** ({})", i + 1, name, platform));
    }

    out.join("\n")
}

fn format_code_only(response: &SearchResponse) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push(format!("## Code Examples: {}\n", response.query));

    for row in &response.results {
        let good = match first_field(row, CODE_GOOD_COLS) {
            Some(good) => good,
            None => continue,
        };
        let name = first_field(row, NAME_COLS).unwrap_or("Example");

        out.push(format!("### {}", name));
        out.push(format!("**Good:** `{}`", good));
        if let Some(bad) = first_field(row, CODE_BAD_COLS) {
            out.push(format!("**Bad:** `{}`", bad));
        }
        out.push(String::new());
    }

    if out.len() > 1 {
        out.join("\n")
    } else {
        "No code examples found".to_string()
    }
}

fn truncate_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_CHARS {
        let cut: String = value.chars().take(MAX_VALUE_CHARS).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}
