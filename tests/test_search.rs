mod helpers;

use anyhow::Result;
use helpers::TestStores;
use studydeck::application::SearchService;
use studydeck::domain::Scope;

#[test]
fn given_exact_term_when_searching_entries_then_exact_match_ranks_first() -> Result<()> {
    // Arrange
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    // Act
    let results = search.search_entries("contract")?;

    // Assert
    assert!(results.len() >= 2);
    assert_eq!(results[0].primary_text, "contract");
    assert_eq!(results[1].primary_text, "contract law");
    for pair in results.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    Ok(())
}

#[test]
fn given_keyword_in_definitions_when_searching_then_matches_secondary_text() -> Result<()> {
    // Arrange
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    // Act: "liability" appears only in the tort definition.
    let results = search.search_entries("liability")?;

    // Assert
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].primary_text, "tort");
    Ok(())
}

#[test]
fn given_empty_query_when_searching_then_returns_empty() -> Result<()> {
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    assert!(search.search_entries("   ")?.is_empty());
    Ok(())
}

#[test]
fn given_query_when_searching_all_then_both_scopes_appear_in_one_ranking() -> Result<()> {
    // Arrange
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    // Act
    let results = search.search_all("contract")?;

    // Assert
    assert!(results.iter().any(|r| r.scope == Scope::Entry));
    assert!(results.iter().any(|r| r.scope == Scope::Note));
    assert_eq!(results[0].result.primary_text, "contract");
    for pair in results.windows(2) {
        assert!(pair[0].result.relevance >= pair[1].result.relevance);
    }
    Ok(())
}

#[test]
fn given_entry_when_requesting_related_terms_then_source_excluded_and_capped() -> Result<()> {
    // Arrange
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    // Act: entry 1 is "contract".
    let related = search.related_terms(1)?;

    // Assert
    assert!(related.len() <= 5);
    assert!(related.iter().all(|r| r.id != 1));
    assert!(related.iter().any(|r| r.primary_text == "contract law"));
    Ok(())
}

#[test]
fn given_identical_inputs_when_searching_twice_then_results_are_identical() -> Result<()> {
    let stores = TestStores::seeded()?;
    let mut search = SearchService::new(stores.open_entry_store()?, stores.open_note_store()?);

    let first: Vec<i64> = search.search_entries("contract")?.iter().map(|r| r.id).collect();
    let second: Vec<i64> = search.search_entries("contract")?.iter().map(|r| r.id).collect();

    assert_eq!(first, second);
    Ok(())
}
