// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! End-to-end extraction over real git repositories


use flxblviz::dataset::Dataset;
use flxblviz::domains::DomainMap;
use flxblviz::extract::{ExtractOptions, ExtractStats, Extractor};
use flxblviz::manifest::MANIFEST_FILE;
use flxblviz::render::{OutputFormat, render};
use flxblviz_git::GitRepo;
use similar_asserts::assert_eq;
use test_utils::{TestGitRepo, manifest};

fn extract(
    repo: &TestGitRepo,
    domains: DomainMap,
    options: ExtractOptions,
) -> (Dataset, ExtractStats) {
    let git = GitRepo::open(repo.path()).expect("open repo");
    let extraction = Extractor::new(domains, options).run(&git).expect("extract");
    (extraction.dataset, extraction.stats)
}

fn script(dataset: &Dataset) -> String {
    let mut buf = Vec::new();
    render(dataset, OutputFormat::Script, &mut buf).expect("render");
    String::from_utf8(buf).expect("utf-8")
}

fn platform_domains() -> DomainMap {
    [("pkg-a".to_string(), "platform".to_string())]
        .into_iter()
        .collect()
}

// ============================================================================
// Single-commit enrichment
// ============================================================================

#[test]
fn test_single_commit_record() {
    let repo = TestGitRepo::new("single-commit");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", Some("pkg-a"))]))
        .create_file("pkg-a/file.go", "package a\n")
        .create_file("pkg-b/file.go", "package b\n");
    repo.commit_at("Initial commit", "2021-05-06T07:08:09+00:00");

    let (dataset, stats) = extract(&repo, platform_domains(), ExtractOptions::default());

    assert_eq!(stats.examined, 1);
    assert_eq!(stats.included, 1);
    assert_eq!(
        script(&dataset),
        "const dataJson = [[{\"path\":\"pkg-a\",\"package\":\"pkg-a\",\"size\":5,\
         \"domain\":\"platform\",\"when\":\"2021-05-06T07:08:09Z\",\"fileCount\":1}]]\n"
    );
}

#[test]
fn test_missing_package_defaults_to_path() {
    let repo = TestGitRepo::new("missing-package");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", None)]))
        .create_file("pkg-a/one.cls", "")
        .create_file("pkg-a/two.cls", "");
    repo.commit_at("Package without name", "2021-05-06T07:08:09+02:00");

    let (dataset, _) = extract(&repo, platform_domains(), ExtractOptions::default());

    let record = &dataset.snapshots()[0][0];
    assert_eq!(record.package, "pkg-a");
    assert_eq!(record.domain, "platform");
    assert_eq!(record.size, 5);
    assert_eq!(record.file_count, 2);
    assert_eq!(record.when.to_rfc3339(), "2021-05-06T07:08:09+02:00");
}

#[test]
fn test_unknown_package_has_empty_domain() {
    let repo = TestGitRepo::new("unknown-domain");
    repo.create_file(MANIFEST_FILE, &manifest(&[("force-app", Some("core"))]));
    repo.commit_at("Initial commit", "2022-01-01T00:00:00+00:00");

    let (dataset, _) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    assert_eq!(dataset.snapshots()[0][0].domain, "");
    assert_eq!(dataset.snapshots()[0][0].file_count, 0);
}

// ============================================================================
// History traversal
// ============================================================================

#[test]
fn test_no_manifest_commits_gives_empty_dataset() {
    let repo = TestGitRepo::new("no-manifest");
    repo.create_file("README.md", "# readme\n");
    repo.commit_at("Docs only", "2022-01-01T00:00:00+00:00");

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    assert!(dataset.is_empty());
    assert_eq!(stats, ExtractStats::default());
    assert_eq!(script(&dataset), "const dataJson = []\n");
}

#[test]
fn test_only_manifest_commits_newest_first() {
    let repo = TestGitRepo::new("newest-first");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", Some("pkg-a"))]));
    repo.commit_at("Add pkg-a", "2022-01-01T00:00:00+00:00");
    repo.create_file("pkg-a/src.cls", "");
    repo.commit_at("Unrelated change", "2022-01-02T00:00:00+00:00");
    repo.create_file(
        MANIFEST_FILE,
        &manifest(&[("pkg-a", Some("pkg-a")), ("pkg-b", Some("pkg-b"))]),
    );
    repo.commit_at("Add pkg-b", "2022-01-03T00:00:00+00:00");

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    assert_eq!(stats.examined, 2);
    let sizes: Vec<usize> = dataset.snapshots().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1]);
    // the newest snapshot sees the file added by the unrelated commit
    assert_eq!(dataset.snapshots()[0][0].file_count, 1);
    assert_eq!(dataset.snapshots()[1][0].file_count, 0);
}

#[test]
fn test_malformed_manifest_commit_is_skipped() {
    let repo = TestGitRepo::new("malformed");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", Some("pkg-a"))]));
    repo.commit_at("Good manifest", "2022-01-01T00:00:00+00:00");
    repo.create_file(MANIFEST_FILE, "{ not json");
    repo.commit_at("Broken manifest", "2022-01-02T00:00:00+00:00");

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    assert_eq!(stats.examined, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.snapshots()[0][0].path, "pkg-a");
}

#[test]
fn test_deleted_manifest_commit_is_skipped() {
    let repo = TestGitRepo::new("deleted");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", Some("pkg-a"))]));
    repo.commit_at("Add manifest", "2022-01-01T00:00:00+00:00");
    repo.remove_file(MANIFEST_FILE);
    repo.commit_at("Remove manifest", "2022-01-02T00:00:00+00:00");

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    assert_eq!(stats.examined, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_commit_limit_keeps_newest() {
    let repo = TestGitRepo::new("limit");
    for (n, date) in ["2022-01-01", "2022-01-02", "2022-01-03"].iter().enumerate() {
        let packages: Vec<(String, Option<&str>)> =
            (0..=n).map(|i| (format!("pkg-{i}"), None)).collect();
        let entries: Vec<(&str, Option<&str>)> =
            packages.iter().map(|(p, pkg)| (p.as_str(), *pkg)).collect();
        repo.create_file(MANIFEST_FILE, &manifest(&entries));
        repo.commit_at("Grow", &format!("{date}T00:00:00+00:00"));
    }

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::bounded(2));

    assert_eq!(stats.examined, 2);
    let sizes: Vec<usize> = dataset.snapshots().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 2]);
}

#[test]
fn test_merged_manifest_change_gives_one_snapshot() {
    let repo = TestGitRepo::new("merge");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", None)]));
    repo.commit_at("Base", "2022-01-01T00:00:00+00:00");
    let trunk = repo.current_branch();

    repo.create_branch("add-pkg-b").create_file(
        MANIFEST_FILE,
        &manifest(&[("pkg-a", None), ("pkg-b", None)]),
    );
    repo.commit_at("Add pkg-b", "2022-01-02T00:00:00+00:00");

    repo.checkout(&trunk).create_file("notes.md", "unrelated\n");
    repo.commit_at("Unrelated change", "2022-01-03T00:00:00+00:00");
    repo.merge_at("add-pkg-b", "2022-01-04T00:00:00+00:00");

    let (dataset, stats) = extract(&repo, DomainMap::default(), ExtractOptions::default());

    // The merge keeps the branch's manifest, so only the branch commit counts.
    assert_eq!(stats.examined, 2);
    let sizes: Vec<usize> = dataset.snapshots().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1]);
    assert_eq!(
        dataset.snapshots()[0][0].when.to_rfc3339(),
        "2022-01-02T00:00:00+00:00"
    );
}

#[test]
fn test_custom_manifest_path() {
    let repo = TestGitRepo::new("custom-manifest");
    repo.create_file(
        "project/sfdx-project.json",
        &manifest(&[("project/app", None)]),
    )
    .create_file("project/app/a.cls", "");
    repo.commit_at("Nested project", "2022-01-01T00:00:00+00:00");

    let options = ExtractOptions::default().with_manifest("project/sfdx-project.json");
    let (dataset, _) = extract(&repo, DomainMap::default(), options);

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.snapshots()[0][0].file_count, 1);
}

#[test]
fn test_extraction_is_repeatable() {
    let repo = TestGitRepo::new("repeatable");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", Some("pkg-a"))]))
        .create_file("pkg-a/file.go", "");
    repo.commit_at("One", "2022-01-01T00:00:00+00:00");
    repo.create_file(MANIFEST_FILE, &manifest(&[("pkg-a", None)]));
    repo.commit_at("Two", "2022-01-02T00:00:00+00:00");

    let (first, _) = extract(&repo, platform_domains(), ExtractOptions::default());
    let (second, _) = extract(&repo, platform_domains(), ExtractOptions::default());

    assert_eq!(script(&first), script(&second));
}
