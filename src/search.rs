//! Search orchestration.
//!
//! All three entry points share one pipeline: load the table, join each
//! row's search columns into a document, fit BM25, score the query, keep
//! the top-N rows with positive scores, and project the output columns.
//!
//! # Multi-domain ordering
//!
//! Multi-domain search does NOT rescore across domains. Rows are ordered
//! by requested-domain order first, then by each domain's own ranking.
//! BM25 scores from different corpora aren't comparable without
//! normalization, and consumers rely on the grouped ordering, so this
//! stays as is.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::bm25::Bm25;
use crate::catalog;
use crate::config::Config;
use crate::models::{field, Row, SearchResponse};
use crate::router::detect_domain;
use crate::table::load_table;

/// Load, rank, and project one table. The shared core of every entry point.
fn rank_table(
    config: &Config,
    path: &Path,
    search_cols: &[&str],
    output_cols: &[&str],
    query: &str,
    limit: usize,
) -> Result<Vec<Row>> {
    let rows = load_table(path)?;

    let documents: Vec<String> = rows
        .iter()
        .map(|row| {
            search_cols
                .iter()
                .map(|col| field(row, col))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let mut bm25 = Bm25::new(config.retrieval.k1, config.retrieval.b);
    bm25.fit(&documents);
    let ranked = bm25.score(query);

    let mut results = Vec::new();
    for (idx, score) in ranked.into_iter().take(limit) {
        if score <= 0.0 {
            continue;
        }
        let row = &rows[idx];
        let mut projected = Row::new();
        for col in output_cols {
            // Absent columns are omitted, never defaulted.
            if let Some(value) = row.get(*col) {
                projected.insert((*col).to_string(), value.clone());
            }
        }
        results.push(projected);
    }

    Ok(results)
}

/// Single-domain search, routing the query when no domain is pinned.
///
/// An unknown domain name falls back to the component table rather than
/// erroring; a missing table file returns an error-field envelope.
pub fn search_domain(
    config: &Config,
    query: &str,
    domain: Option<&str>,
    limit: usize,
) -> Result<SearchResponse> {
    let domain = domain.unwrap_or_else(|| detect_domain(query)).to_string();
    let spec = catalog::domain_spec_or_default(&domain);

    let path = config.data.dir.join(spec.file);
    if !path.exists() {
        return Ok(SearchResponse {
            domain: Some(domain),
            query: query.to_string(),
            error: Some(format!("file not found: {}", path.display())),
            ..SearchResponse::default()
        });
    }

    let results = rank_table(config, &path, spec.search_cols, spec.output_cols, query, limit)?;

    Ok(SearchResponse {
        domain: Some(domain),
        query: query.to_string(),
        file: Some(spec.file.to_string()),
        count: results.len(),
        results,
        ..SearchResponse::default()
    })
}

/// Stack-specific search against the per-stack guideline tables.
///
/// Unknown stack identifiers produce an error envelope listing the valid
/// set — the disjoint stack namespace has no fallback.
pub fn search_stack(
    config: &Config,
    query: &str,
    stack: &str,
    limit: usize,
) -> Result<SearchResponse> {
    let file = match catalog::stack_file(stack) {
        Some(file) => file,
        None => {
            return Ok(SearchResponse::from_error(
                query,
                format!(
                    "Unknown stack: {}. Available: {}",
                    stack,
                    catalog::stack_names().join(", ")
                ),
            ));
        }
    };

    let path = config.data.dir.join(file);
    if !path.exists() {
        return Ok(SearchResponse {
            stack: Some(stack.to_string()),
            query: query.to_string(),
            error: Some(format!("stack file not found: {}", path.display())),
            ..SearchResponse::default()
        });
    }

    let results = rank_table(
        config,
        &path,
        catalog::STACK_SEARCH_COLS,
        catalog::STACK_OUTPUT_COLS,
        query,
        limit,
    )?;

    Ok(SearchResponse {
        domain: Some("stack".to_string()),
        stack: Some(stack.to_string()),
        query: query.to_string(),
        file: Some(file.to_string()),
        count: results.len(),
        results,
        ..SearchResponse::default()
    })
}

/// Search several domains in one pass.
///
/// Each requested domain runs the full pipeline independently; unknown
/// domains and missing table files are skipped without failing the call.
/// Every row is tagged with its originating domain (`_domain`), then the
/// concatenated results go through the optional platform filter and a
/// final global truncation.
pub fn search_multi_domain(
    config: &Config,
    query: &str,
    domains: &[String],
    limit: usize,
    platform: Option<&str>,
) -> Result<SearchResponse> {
    let valid: Vec<String> = domains
        .iter()
        .filter(|domain| catalog::domain_spec(domain).is_some())
        .cloned()
        .collect();

    let mut all_results: Vec<Row> = Vec::new();
    for domain in &valid {
        let spec = match catalog::domain_spec(domain) {
            Some(spec) => spec,
            None => continue,
        };
        let path = config.data.dir.join(spec.file);
        if !path.exists() {
            continue;
        }

        let mut rows = rank_table(config, &path, spec.search_cols, spec.output_cols, query, limit)?;
        for row in &mut rows {
            row.insert("_domain".to_string(), Value::String(domain.clone()));
        }
        all_results.extend(rows);
    }

    if let Some(platform) = platform {
        all_results = filter_by_platform(all_results, platform);
    }
    all_results.truncate(limit);

    Ok(SearchResponse {
        domains: Some(valid),
        query: query.to_string(),
        platform: platform.map(str::to_string),
        count: all_results.len(),
        results: all_results,
        ..SearchResponse::default()
    })
}

/// Keep rows whose Platform value matches the hint's keyword set or
/// declares cross-platform support.
///
/// A filter that would eliminate every row is discarded and the input
/// comes back unchanged — an over-aggressive filter should not make the
/// search look empty. Unknown hints are a no-op for the same reason.
pub fn filter_by_platform(rows: Vec<Row>, platform: &str) -> Vec<Row> {
    let keywords = match catalog::platform_keywords(platform) {
        Some(keywords) => keywords,
        None => return rows,
    };

    let filtered: Vec<Row> = rows
        .iter()
        .filter(|row| {
            let value = field(row, "Platform").to_lowercase();
            value.contains(catalog::CROSS_PLATFORM_MARKER)
                || keywords.iter().any(|keyword| value.contains(keyword))
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        rows
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.data.dir = dir.to_path_buf();
        config
    }

    fn write_components(dir: &Path) {
        fs::write(
            dir.join("components.csv"),
            "Component,Platform,Accessibility,Best Practices,SwiftUI API,Compose API\n\
             Alert dialog,cross-platform,Announce on open,Use a dialog for blocking choices,.alert,AlertDialog\n\
             Card,android,Group content,Prefer cards for collections,,Card\n\
             Bottom sheet,ios,Support escape gesture,Use a sheet not a dialog for tasks,.sheet,ModalBottomSheet\n\
             Chip,cross-platform,Label clearly,Chips filter or select,,FilterChip\n\
             Slider,android,Expose value,Continuous values only,Slider,Slider\n",
        )
        .unwrap();
    }

    fn row_with_platform(platform: &str) -> Row {
        let mut row = Row::new();
        row.insert("Platform".to_string(), Value::String(platform.to_string()));
        row
    }

    #[test]
    fn dialog_query_returns_only_positive_scoring_rows() {
        let tmp = TempDir::new().unwrap();
        write_components(tmp.path());
        let config = config_for(tmp.path());

        // 5 rows, exactly 2 mention "dialog" in their search columns.
        let response = search_domain(&config, "dialog", Some("component"), 3).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.results.len(), 2);
        assert!(response.error.is_none());
        for row in &response.results {
            let text = format!(
                "{} {}",
                field(row, "Component"),
                field(row, "Best Practices")
            );
            assert!(text.to_lowercase().contains("dialog"));
        }
    }

    #[test]
    fn projection_keeps_only_output_columns_present_in_the_row() {
        let tmp = TempDir::new().unwrap();
        write_components(tmp.path());
        let config = config_for(tmp.path());

        let response = search_domain(&config, "dialog", Some("component"), 3).unwrap();
        let row = &response.results[0];
        // "Flutter API" and "RN Component" are configured output columns
        // but absent from this table, so they must not appear.
        assert!(row.get("Flutter API").is_none());
        assert!(row.get("RN Component").is_none());
        assert!(row.get("Component").is_some());
    }

    #[test]
    fn unpinned_query_is_routed() {
        let tmp = TempDir::new().unwrap();
        write_components(tmp.path());
        let config = config_for(tmp.path());

        let response = search_domain(&config, "dialog", None, 3).unwrap();
        assert_eq!(response.domain.as_deref(), Some("component"));
    }

    #[test]
    fn unknown_domain_falls_back_to_component_table() {
        let tmp = TempDir::new().unwrap();
        write_components(tmp.path());
        let config = config_for(tmp.path());

        let response = search_domain(&config, "dialog", Some("mystery"), 3).unwrap();
        assert_eq!(response.file.as_deref(), Some("components.csv"));
        assert!(response.error.is_none());
    }

    #[test]
    fn missing_table_reports_not_found_in_the_envelope() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());

        let response = search_domain(&config, "dialog", Some("component"), 3).unwrap();
        assert!(response.error.as_deref().unwrap().contains("file not found"));
        assert_eq!(response.count, 0);
    }

    #[test]
    fn unknown_stack_lists_the_valid_set() {
        let tmp = TempDir::new().unwrap();
        let config = config_for(tmp.path());

        let response = search_stack(&config, "buttons", "angular", 3).unwrap();
        let message = response.error.unwrap();
        assert!(message.contains("Unknown stack: angular"));
        assert!(message.contains("swiftui"));
        assert!(message.contains("liquid-glass"));
    }

    #[test]
    fn stack_search_uses_the_shared_stack_columns() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("stacks")).unwrap();
        fs::write(
            tmp.path().join("stacks/swiftui.csv"),
            "Category,Guideline,Description,Do,Don't,Code Good,Code Bad,Severity,Docs URL\n\
             State,Prefer @State for local state,View-local mutable state,Use @State,Share mutable structs,@State private var count = 0,var count = 0,high,https://example.dev/state\n",
        )
        .unwrap();
        let config = config_for(tmp.path());

        let response = search_stack(&config, "local state", "swiftui", 3).unwrap();
        assert_eq!(response.stack.as_deref(), Some("swiftui"));
        assert_eq!(response.domain.as_deref(), Some("stack"));
        assert_eq!(response.count, 1);
        assert_eq!(
            field(&response.results[0], "Code Good"),
            "@State private var count = 0"
        );
    }

    #[test]
    fn platform_filter_keeps_matching_and_cross_platform_rows() {
        let rows = vec![
            row_with_platform("ios-only"),
            row_with_platform("android-only"),
            row_with_platform("cross-platform"),
        ];

        let filtered = filter_by_platform(rows, "ios");
        assert_eq!(filtered.len(), 2);
        assert_eq!(field(&filtered[0], "Platform"), "ios-only");
        assert_eq!(field(&filtered[1], "Platform"), "cross-platform");
    }

    #[test]
    fn all_eliminating_platform_filter_is_discarded() {
        let rows = vec![row_with_platform("android"), row_with_platform("android")];
        let filtered = filter_by_platform(rows.clone(), "ios");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn multi_domain_keeps_domain_then_rank_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("colors.csv"),
            "Palette Name,Platform,Dynamic Color Support,Primary\n\
             Primary tonal,android,yes,#6750A4\n\
             Primary muted,ios,no,#5B5B7A\n\
             Neutral,cross-platform,yes,#909090\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("typography.csv"),
            "Style Name,Platform,Use Case,Font Family\n\
             Display primary,cross-platform,Hero text,Roboto\n\
             Caption,android,Fine print,Roboto\n",
        )
        .unwrap();
        let config = config_for(tmp.path());

        let domains = vec!["color".to_string(), "typography".to_string()];
        let response = search_multi_domain(&config, "primary", &domains, 2, None).unwrap();

        // color yields 2 matches, typography 1; the global limit of 2
        // keeps both color rows — domain order, not cross-domain score.
        assert_eq!(response.count, 2);
        for row in &response.results {
            assert_eq!(field(row, "_domain"), "color");
        }
    }

    #[test]
    fn multi_domain_skips_unknown_domains_and_missing_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("colors.csv"),
            "Palette Name,Platform,Dynamic Color Support\nPrimary tonal,android,yes\n",
        )
        .unwrap();
        let config = config_for(tmp.path());

        let domains = vec![
            "nonsense".to_string(),
            "typography".to_string(), // configured, but no file on disk
            "color".to_string(),
        ];
        let response = search_multi_domain(&config, "primary", &domains, 5, None).unwrap();

        assert_eq!(
            response.domains.as_deref(),
            Some(&["typography".to_string(), "color".to_string()][..])
        );
        assert_eq!(response.count, 1);
        assert_eq!(field(&response.results[0], "_domain"), "color");
    }

    #[test]
    fn multi_domain_platform_filter_runs_before_truncation() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("colors.csv"),
            "Palette Name,Platform,Dynamic Color Support\n\
             Primary tonal,android,yes\n\
             Primary muted,ios,no\n\
             Primary neutral,cross-platform,yes\n",
        )
        .unwrap();
        let config = config_for(tmp.path());

        let domains = vec!["color".to_string()];
        let response =
            search_multi_domain(&config, "primary", &domains, 2, Some("ios")).unwrap();

        // The shortest row ("Primary muted", ios) and "Primary tonal"
        // (android) win the per-domain top-2; the filter then drops the
        // android row.
        assert_eq!(response.platform.as_deref(), Some("ios"));
        assert_eq!(response.count, 1);
        assert_eq!(field(&response.results[0], "Palette Name"), "Primary muted");
    }
}
