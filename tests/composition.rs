// Composition tests — the full pipeline chained end to end:
//   CSV sources -> aggregation -> topic grouping -> {lexical, entities,
//   similarity} -> artifact export
// using the baseline engine and a temporary directory of fixtures.

use std::fs;
use std::io::Write;
use std::path::Path;

use lexiscope::analysis::{analyze_entities, analyze_lexical, similarity_report};
use lexiscope::engine::heuristic::HeuristicEngine;
use lexiscope::engine::traits::LanguageEngine;
use lexiscope::ingest::{gather_rows, group_topics, iter_sources};
use lexiscope::output::export::write_artifacts;

fn write_csv(dir: &Path, name: &str, contents: &str) {
    let mut f = fs::File::create(dir.join(name)).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "01_weather.csv",
        "title,context\n\
         Storms,Winter storms battered the northern coastline for days.\n\
         Storms,Winter storms battered the northern coastline for days.\n\
         Storms,Flooding followed the storms in low valleys.\n\
         Harvest,Farmers gathered wheat before the rain arrived.\n",
    );
    write_csv(
        dir.path(),
        "02_people.csv",
        "title,context\n\
         Harvest,Dr Marta Kovac studied crop yields in 1998.\n\
         Voyages,Captain Ines Moreau sailed from London to Cairo.\n",
    );
    // Missing the required columns — must be skipped, not fatal
    write_csv(dir.path(), "03_broken.csv", "heading,body\nX,unusable\n");
    dir
}

#[test]
fn pipeline_produces_all_three_reports() {
    let dir = fixture_dir();
    let engine = HeuristicEngine::new().unwrap();

    let table = gather_rows(iter_sources(dir.path()).unwrap());
    let topics = group_topics(&table);

    assert_eq!(topics.len(), 3, "Storms, Harvest, Voyages");

    let lexical = analyze_lexical(&topics, &engine).unwrap();
    let entities = analyze_entities(&topics, &engine).unwrap();
    let similarity = similarity_report(&topics, &engine).unwrap();

    // Every topic appears in every report
    for title in topics.keys() {
        assert!(lexical.contains_key(title));
        assert!(entities.contains_key(title));
        assert!(similarity.titles.contains(title));
    }

    // The matrix is square with the topic count as dimension
    assert_eq!(similarity.matrix.len(), 3);
    assert!(similarity.summary.is_some());
}

#[test]
fn within_source_duplicate_is_dropped_but_cross_source_title_merge_works() {
    let dir = fixture_dir();
    let table = gather_rows(iter_sources(dir.path()).unwrap());

    // 01_weather.csv had 4 rows, one an exact duplicate context; 02 adds 2
    assert_eq!(table.len(), 5);

    let topics = group_topics(&table);
    // Harvest spans both sources, joined in row order
    assert_eq!(
        topics["Harvest"],
        "Farmers gathered wheat before the rain arrived. \
         Dr Marta Kovac studied crop yields in 1998."
    );
}

#[test]
fn cross_source_duplicate_contexts_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "a.csv", "title,context\nT,the same passage\n");
    write_csv(dir.path(), "b.csv", "title,context\nT,the same passage\n");

    let table = gather_rows(iter_sources(dir.path()).unwrap());
    assert_eq!(table.len(), 2, "dedup is scoped to a single source");

    let topics = group_topics(&table);
    assert_eq!(topics["T"], "the same passage the same passage");
}

#[test]
fn broken_source_is_skipped_and_run_completes() {
    let dir = fixture_dir();
    let batches: Vec<_> = iter_sources(dir.path()).unwrap().collect();
    let names: Vec<String> = batches
        .iter()
        .map(|b| b.source.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["01_weather.csv", "02_people.csv"]);
}

#[test]
fn lexical_report_invariants_hold() {
    let dir = fixture_dir();
    let engine = HeuristicEngine::new().unwrap();
    let topics = group_topics(&gather_rows(iter_sources(dir.path()).unwrap()));
    let lexical = analyze_lexical(&topics, &engine).unwrap();

    for (title, report) in &lexical {
        assert!(
            (0.0..=1.0).contains(&report.ttr),
            "TTR out of range for {title}"
        );
        assert_eq!(report.ttr == 0.0, report.tokens.is_empty());

        let pos_total: u64 = report.pos_counts.values().sum();
        let annotated = engine.annotate(&topics[title]).unwrap();
        assert_eq!(
            pos_total,
            annotated.tokens.len() as u64,
            "POS tally must cover unfiltered tokens for {title}"
        );
    }
}

#[test]
fn entities_found_and_deduplicated_across_the_corpus() {
    let dir = fixture_dir();
    let engine = HeuristicEngine::new().unwrap();
    let topics = group_topics(&gather_rows(iter_sources(dir.path()).unwrap()));
    let entities = analyze_entities(&topics, &engine).unwrap();

    let harvest = &entities["Harvest"];
    assert!(
        harvest.get("PERSON").is_some_and(|s| s.contains("Marta Kovac")),
        "expected Marta Kovac in {harvest:?}"
    );
    assert!(harvest.get("DATE").is_some_and(|s| s.contains("1998")));

    let voyages = &entities["Voyages"];
    assert!(
        voyages.get("LOC").is_some_and(|s| s.contains("London")),
        "expected London in {voyages:?}"
    );
}

#[test]
fn similarity_matrix_is_symmetric_with_unit_diagonal() {
    let dir = fixture_dir();
    let engine = HeuristicEngine::new().unwrap();
    let topics = group_topics(&gather_rows(iter_sources(dir.path()).unwrap()));
    let report = similarity_report(&topics, &engine).unwrap();

    let n = report.titles.len();
    for i in 0..n {
        assert!(
            (report.matrix[i][i] - 1.0).abs() < 1e-9,
            "non-empty corpus should self-score 1.0"
        );
        for j in 0..n {
            assert!(
                (report.matrix[i][j] - report.matrix[j][i]).abs() < 1e-9,
                "matrix must be symmetric at ({i},{j})"
            );
            assert!((0.0..=1.0 + 1e-9).contains(&report.matrix[i][j]));
        }
    }
}

#[test]
fn artifacts_round_trip_through_the_filesystem() {
    let dir = fixture_dir();
    let out = tempfile::tempdir().unwrap();
    let engine = HeuristicEngine::new().unwrap();

    let topics = group_topics(&gather_rows(iter_sources(dir.path()).unwrap()));
    let lexical = analyze_lexical(&topics, &engine).unwrap();
    let entities = analyze_entities(&topics, &engine).unwrap();
    let similarity = similarity_report(&topics, &engine).unwrap();

    let written = write_artifacts(out.path(), &lexical, &entities, &similarity).unwrap();
    assert_eq!(written.len(), 4);

    // The JSON artifacts must parse back
    let lexical_json = fs::read_to_string(out.path().join("lexical_analysis.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&lexical_json).unwrap();
    assert!(parsed.get("Storms").is_some());

    let matrix_csv = fs::read_to_string(out.path().join("similarity_matrix.csv")).unwrap();
    assert!(matrix_csv.lines().next().unwrap().contains("Storms"));
}

#[test]
fn empty_input_directory_yields_empty_but_defined_results() {
    let dir = tempfile::tempdir().unwrap();
    let engine = HeuristicEngine::new().unwrap();

    let topics = group_topics(&gather_rows(iter_sources(dir.path()).unwrap()));
    assert!(topics.is_empty());

    let lexical = analyze_lexical(&topics, &engine).unwrap();
    let entities = analyze_entities(&topics, &engine).unwrap();
    let similarity = similarity_report(&topics, &engine).unwrap();

    assert!(lexical.is_empty());
    assert!(entities.is_empty());
    assert!(similarity.summary.is_none(), "no off-diagonal candidates");
}
