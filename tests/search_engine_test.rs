//! Integration tests for the search engine over the fixture corpus.

use std::path::PathBuf;
use std::sync::Arc;

use lexis::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixture_corpus() -> Arc<Corpus> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lexis_words.json");
    Arc::new(Corpus::open(path).unwrap())
}

fn engines() -> Vec<SearchEngine> {
    let corpus = fixture_corpus();
    vec![
        SearchEngine::new(Arc::clone(&corpus), SearchConfig::sequential()).unwrap(),
        SearchEngine::new(
            Arc::clone(&corpus),
            SearchConfig::default()
                .with_parallel_threshold(0)
                .with_thread_pool_size(3),
        )
        .unwrap(),
    ]
}

fn firsts(words: &[&WordRecord]) -> Vec<String> {
    words.iter().map(|w| w.forms()[0].clone()).collect()
}

#[test]
fn test_prefix_search() -> Result<()> {
    for engine in engines() {
        assert_eq!(
            firsts(&engine.search_by_form_prefix("am")?),
            vec!["amo", "amicus", "ambulo"]
        );
        assert_eq!(firsts(&engine.search_by_form_prefix("secutus")?), vec!["sequor"]);
        assert!(engine.search_by_form_prefix("xy")?.is_empty());
    }
    Ok(())
}

#[test]
fn test_contains_search() -> Result<()> {
    for engine in engines() {
        assert_eq!(
            firsts(&engine.search_by_form_contains("mi")?),
            vec!["amicus", "femina"]
        );
        assert_eq!(
            firsts(&engine.search_by_form_contains("u")?),
            vec!["amo", "amicus", "bellum", "cum", "sequor", "ambulo", "magnus"]
        );
    }
    Ok(())
}

#[test]
fn test_definition_search() -> Result<()> {
    for engine in engines() {
        assert_eq!(
            firsts(&engine.search_by_definition_contains("love")?),
            vec!["amo", "amicus"]
        );
        assert_eq!(
            firsts(&engine.search_by_definition_contains("walk")?),
            vec!["ambulo"]
        );
        assert!(engine.search_by_definition_contains("Love")?.is_empty());
    }
    Ok(())
}

#[test]
fn test_results_satisfy_predicates() -> Result<()> {
    let engine = SearchEngine::new(fixture_corpus(), SearchConfig::sequential())?;

    for term in ["a", "am", "be", "se", "um", "e"] {
        let prefixed = engine.search_by_form_prefix(term)?;
        for word in engine.list_all() {
            let expected = word.forms().iter().any(|f| f.starts_with(term));
            assert_eq!(prefixed.contains(&word), expected, "prefix {term:?}");
        }

        let containing = engine.search_by_definition_contains(term)?;
        for word in engine.list_all() {
            let expected = word
                .definitions()
                .iter()
                .flat_map(|d| d.terms())
                .any(|t| t.contains(term));
            assert_eq!(containing.contains(&word), expected, "definition {term:?}");
        }
    }
    Ok(())
}

#[test]
fn test_empty_term() {
    for engine in engines() {
        assert!(matches!(
            engine.search_by_form_prefix(""),
            Err(LexisError::EmptySearchTerm)
        ));
        assert!(matches!(
            engine.search(&WordQuery::new(MatchKind::FormContains, "")),
            Err(LexisError::EmptySearchTerm)
        ));
    }
}

#[test]
fn test_list_all_and_random() -> Result<()> {
    let engine = SearchEngine::new(fixture_corpus(), SearchConfig::sequential())?;
    assert_eq!(engine.list_all().len(), 10);

    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let word = engine.pick_random_with(&mut rng)?;
        seen.insert(word.forms()[0].clone());
    }
    // Every word is reachable.
    assert_eq!(seen.len(), 10);
    Ok(())
}

#[test]
fn test_results_share_cached_encoding() -> Result<()> {
    let engine = SearchEngine::new(fixture_corpus(), SearchConfig::sequential())?;

    let first = engine.search_by_form_prefix("bell")?;
    let second = engine.search_by_definition_contains("battle")?;
    assert!(std::ptr::eq(first[0].to_json(), second[0].to_json()));

    let serialized = serde_json::to_value(&first)?;
    assert_eq!(serialized[0]["word_type"]["gender"], "Neuter");
    Ok(())
}

#[test]
fn test_entry_with_broken_definition_stays_searchable() -> Result<()> {
    let corpus = Corpus::load(
        r#"[
            { "forms": ["amo", "amare"], "definitions": [{ "terms": ["love"] }, { "gloss": "x" }] },
            { "forms": ["bellum"], "definitions": [{ "terms": ["war"] }] }
        ]"#,
    );
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.skipped(), 0);

    let engine = SearchEngine::with_corpus(corpus)?;
    assert_eq!(firsts(&engine.search_by_form_prefix("am")?), vec!["amo"]);
    assert_eq!(
        firsts(&engine.search_by_definition_contains("love")?),
        vec!["amo"]
    );
    Ok(())
}

#[test]
fn test_numeric_forms_are_searchable() -> Result<()> {
    let corpus = Corpus::load(
        r#"[{ "forms": ["decem", 10], "definitions": [{ "terms": ["ten", 10, true, null] }] }]"#,
    );
    let engine = SearchEngine::with_corpus(corpus)?;

    assert_eq!(engine.list_all()[0].forms(), &["decem", "10"]);
    assert_eq!(firsts(&engine.search_by_form_contains("10")?), vec!["decem"]);
    assert_eq!(
        engine.list_all()[0].definition_terms().collect::<Vec<_>>(),
        vec!["ten", "10", "true"]
    );
    Ok(())
}
