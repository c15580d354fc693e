//! Integration tests for depscout
//!
//! These tests verify:
//! - Full pipeline classification against a stubbed registry
//! - Verdict ordering and summary counting across mixed batches
//! - Release note retrieval fallbacks end to end

use chrono::{DateTime, Duration, TimeZone, Utc};
use depscout::changelog::ReleaseNoteLocator;
use depscout::classify::Classifier;
use depscout::domain::DependencyDeclaration;
use depscout::pipeline::Pipeline;
use depscout::registry::{HttpClient, NpmRegistry};
use serde_json::json;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Build a minimal npm packument body
fn packument(
    latest: &str,
    versions: &[&str],
    published_days_ago: i64,
    repository: Option<&str>,
    changelog: Option<&str>,
) -> String {
    let mut version_entries = serde_json::Map::new();
    for version in versions {
        let entry = if *version == latest {
            match changelog {
                Some(url) => json!({ "changelog": url }),
                None => json!({}),
            }
        } else {
            json!({})
        };
        version_entries.insert(version.to_string(), entry);
    }

    let mut time = serde_json::Map::new();
    time.insert(
        latest.to_string(),
        json!((fixed_now() - Duration::days(published_days_ago)).to_rfc3339()),
    );

    let mut body = json!({
        "dist-tags": { "latest": latest },
        "versions": version_entries,
        "time": time,
    });
    if let Some(repo) = repository {
        body["repository"] = json!({ "url": repo });
    }
    body.to_string()
}

/// Build a pipeline talking to the given stub servers with a fixed clock
fn pipeline_against(registry_url: &str, raw_base: &str) -> Pipeline {
    let client = HttpClient::new().unwrap();
    Pipeline::with_components(
        Box::new(NpmRegistry::with_base_url(client.clone(), registry_url)),
        Box::new(ReleaseNoteLocator::with_raw_base(client, raw_base)),
        Classifier::with_time(6.0, fixed_now()),
        4,
    )
}

mod pipeline_classification {
    use super::*;
    use depscout::domain::{DependencyVerdict, NoteProvenance};

    /// A batch mixing every verdict category keeps manifest order and
    /// counts each dependency exactly once
    #[tokio::test]
    async fn test_mixed_batch_keeps_order_and_counts() {
        let mut server = mockito::Server::new_async().await;
        let _alpha = server
            .mock("GET", "/alpha")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument("1.0.0", &["1.0.0"], 10, None, None))
            .create_async()
            .await;
        let _beta = server
            .mock("GET", "/beta")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument("2.0.0", &["1.0.0", "2.0.0"], 10, None, None))
            .create_async()
            .await;
        let _gamma = server
            .mock("GET", "/gamma")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument("1.5.0", &["1.0.0", "1.5.0"], 300, None, None))
            .create_async()
            .await;
        let _delta = server
            .mock("GET", "/delta")
            .with_status(404)
            .create_async()
            .await;

        let declarations = vec![
            DependencyDeclaration::new("alpha", "^1.0.0"),
            DependencyDeclaration::new("beta", "^1.0.0"),
            DependencyDeclaration::new("gamma", "^1.0.0"),
            DependencyDeclaration::new("delta", "^1.0.0"),
        ];

        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        let names: Vec<&str> = report.verdicts.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma", "delta"]);

        assert!(report.verdicts[0].is_up_to_date());
        assert!(report.verdicts[1].is_update_available());
        assert!(report.verdicts[2].is_stale());
        assert!(report.verdicts[3].is_error());

        assert_eq!(report.summary.up_to_date, 1);
        assert_eq!(report.summary.update_available, 1);
        assert_eq!(report.summary.stale, 1);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.total(), declarations.len());
    }

    /// The documented end-to-end scenario: a pending update whose declared
    /// changelog mentions a breaking change
    #[tokio::test]
    async fn test_breaking_update_via_declared_changelog() {
        let mut server = mockito::Server::new_async().await;
        let notes_url = format!("{}/notes/left-pad.md", server.url());
        let _registry = server
            .mock("GET", "/left-pad")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "1.3.0",
                &["1.0.0", "1.1.0", "1.2.0", "1.3.0"],
                10,
                None,
                Some(&notes_url),
            ))
            .create_async()
            .await;
        let notes = server
            .mock("GET", "/notes/left-pad.md")
            .with_status(200)
            .with_body("## 1.3.0\nBreaking change: removed default export")
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("left-pad", "^1.0.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        notes.assert_async().await;
        assert_eq!(report.verdicts.len(), 1);
        assert!(report.verdicts[0].has_breaking_risk());
        if let DependencyVerdict::UpdateAvailable {
            current_version,
            latest_version,
            excerpt,
            note_source,
            ..
        } = &report.verdicts[0]
        {
            assert_eq!(current_version, "1.0.0");
            assert_eq!(latest_version, "1.3.0");
            assert!(excerpt.contains("Breaking change: removed default export"));
            assert_eq!(*note_source, Some(NoteProvenance::DeclaredChangelog));
        } else {
            panic!("Expected UpdateAvailable verdict");
        }
    }

    /// Only the sections for versions between baseline and latest land in
    /// the excerpt
    #[tokio::test]
    async fn test_excerpt_scoped_to_pending_versions() {
        let mut server = mockito::Server::new_async().await;
        let notes_url = format!("{}/notes/widget.md", server.url());
        let _registry = server
            .mock("GET", "/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "1.4.0",
                &["1.2.0", "1.3.0", "1.4.0"],
                10,
                None,
                Some(&notes_url),
            ))
            .create_async()
            .await;
        let _notes = server
            .mock("GET", "/notes/widget.md")
            .with_status(200)
            .with_body("## v1.2.0\nold line\n## v1.3.0\nmid line\n## v1.4.0\nnew line")
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("widget", "^1.2.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        if let DependencyVerdict::UpdateAvailable { excerpt, .. } = &report.verdicts[0] {
            assert!(excerpt.contains("mid line"));
            assert!(excerpt.contains("new line"));
            assert!(!excerpt.contains("old line"));
        } else {
            panic!("Expected UpdateAvailable verdict");
        }
    }

    /// One failing registry lookup does not disturb the other dependencies
    #[tokio::test]
    async fn test_registry_failure_is_isolated() {
        let mut server = mockito::Server::new_async().await;
        let _good = server
            .mock("GET", "/good")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument("1.0.0", &["1.0.0"], 10, None, None))
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let declarations = vec![
            DependencyDeclaration::new("missing", "^1.0.0"),
            DependencyDeclaration::new("good", "^1.0.0"),
        ];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        assert!(report.verdicts[0].is_error());
        if let DependencyVerdict::Error { message, .. } = &report.verdicts[0] {
            assert!(message.contains("not found"));
        }
        assert!(report.verdicts[1].is_up_to_date());
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.up_to_date, 1);
    }
}

mod release_note_fallbacks {
    use super::*;
    use depscout::domain::{DependencyVerdict, NoteProvenance};

    /// Without a declared changelog the repository CHANGELOG.md is used
    #[tokio::test]
    async fn test_repository_changelog_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _registry = server
            .mock("GET", "/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "2.0.0",
                &["1.0.0", "2.0.0"],
                10,
                Some("git+https://github.com/acme/widget.git"),
                None,
            ))
            .create_async()
            .await;
        let changelog = server
            .mock("GET", "/acme/widget/master/CHANGELOG.md")
            .with_status(200)
            .with_body("## 2.0.0\nBreaking change: renamed the API")
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("widget", "^1.0.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        changelog.assert_async().await;
        assert!(report.verdicts[0].has_breaking_risk());
        if let DependencyVerdict::UpdateAvailable { note_source, .. } = &report.verdicts[0] {
            assert_eq!(*note_source, Some(NoteProvenance::RepositoryChangelog));
        } else {
            panic!("Expected UpdateAvailable verdict");
        }
    }

    /// A missing repository changelog falls back to the README
    #[tokio::test]
    async fn test_readme_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _registry = server
            .mock("GET", "/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "2.0.0",
                &["1.0.0", "2.0.0"],
                10,
                Some("https://github.com/acme/widget"),
                None,
            ))
            .create_async()
            .await;
        let _changelog = server
            .mock("GET", "/acme/widget/master/CHANGELOG.md")
            .with_status(404)
            .create_async()
            .await;
        let readme = server
            .mock("GET", "/acme/widget/master/README.md")
            .with_status(200)
            .with_body("# widget\n## 2.0.0\nnew things")
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("widget", "^1.0.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        readme.assert_async().await;
        assert!(!report.verdicts[0].has_breaking_risk());
        if let DependencyVerdict::UpdateAvailable {
            excerpt,
            note_source,
            ..
        } = &report.verdicts[0]
        {
            assert!(excerpt.contains("new things"));
            assert_eq!(*note_source, Some(NoteProvenance::RepositoryReadme));
        } else {
            panic!("Expected UpdateAvailable verdict");
        }
    }

    /// A stale dependency never reaches for release notes
    #[tokio::test]
    async fn test_stale_dependency_never_fetches_notes() {
        let mut server = mockito::Server::new_async().await;
        let notes_url = format!("{}/notes/widget.md", server.url());
        let _registry = server
            .mock("GET", "/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "2.0.0",
                &["1.0.0", "2.0.0"],
                300,
                Some("https://github.com/acme/widget"),
                Some(&notes_url),
            ))
            .create_async()
            .await;
        let notes = server
            .mock("GET", "/notes/widget.md")
            .expect(0)
            .create_async()
            .await;
        let changelog = server
            .mock("GET", "/acme/widget/master/CHANGELOG.md")
            .expect(0)
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("widget", "^1.0.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        notes.assert_async().await;
        changelog.assert_async().await;
        assert!(report.verdicts[0].is_stale());
    }

    /// An up-to-date dependency makes no calls beyond the registry fetch
    #[tokio::test]
    async fn test_up_to_date_dependency_never_fetches_notes() {
        let mut server = mockito::Server::new_async().await;
        let notes_url = format!("{}/notes/widget.md", server.url());
        let registry = server
            .mock("GET", "/widget")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(packument(
                "1.0.0",
                &["1.0.0"],
                10,
                Some("https://github.com/acme/widget"),
                Some(&notes_url),
            ))
            .create_async()
            .await;
        let notes = server
            .mock("GET", "/notes/widget.md")
            .expect(0)
            .create_async()
            .await;
        let changelog = server
            .mock("GET", "/acme/widget/master/CHANGELOG.md")
            .expect(0)
            .create_async()
            .await;

        let declarations = vec![DependencyDeclaration::new("widget", "^1.0.0")];
        let report = pipeline_against(&server.url(), &server.url())
            .run(&declarations, false)
            .await;

        registry.assert_async().await;
        notes.assert_async().await;
        changelog.assert_async().await;
        assert!(report.verdicts[0].is_up_to_date());
    }
}
