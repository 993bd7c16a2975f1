use super::*;

fn hit(id: &str, title: &str, authors: &[&str], year: i64, doi: Option<&str>) -> SearchHit {
    SearchHit {
        id: Some(id.to_owned()),
        title: Some(title.to_owned()),
        authors: authors.iter().map(|a| (*a).to_owned()).collect(),
        year: Some(year),
        doi: doi.map(ToOwned::to_owned),
        ..SearchHit::default()
    }
}

fn params(terms: &str) -> SearchParams {
    SearchParams {
        search_terms: terms.to_owned(),
        start_year: Some(2015),
        end_year: Some(2025),
        sort_option: SortOption::Relevance,
    }
}

// =============================================================
// History capping
// =============================================================

#[test]
fn history_is_most_recent_first() {
    let mut history = Vec::new();
    push_history(&mut history, params("solos"));
    push_history(&mut history, params("citros"));
    assert_eq!(history[0].search_terms, "citros");
    assert_eq!(history[1].search_terms, "solos");
}

#[test]
fn history_dedupes_by_query_expression() {
    let mut history = Vec::new();
    push_history(&mut history, params("solos"));
    push_history(&mut history, params("citros"));
    push_history(&mut history, params("solos"));
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].search_terms, "solos");
}

#[test]
fn history_is_capped_at_limit() {
    let mut history = Vec::new();
    for i in 0..8 {
        push_history(&mut history, params(&format!("query-{i}")));
    }
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].search_terms, "query-7");
    assert_eq!(history[HISTORY_LIMIT - 1].search_terms, "query-3");
}

// =============================================================
// Hit decoding
// =============================================================

#[test]
fn authors_accept_array_or_single_string() {
    let from_array: SearchHit =
        serde_json::from_str(r#"{ "title": "t", "authors": ["A", "B"] }"#).unwrap();
    assert_eq!(from_array.authors, vec!["A", "B"]);

    let from_string: SearchHit =
        serde_json::from_str(r#"{ "title": "t", "authors": "Silva, J." }"#).unwrap();
    assert_eq!(from_string.authors, vec!["Silva, J."]);
}

#[test]
fn year_accepts_number_or_string() {
    let n: SearchHit = serde_json::from_str(r#"{ "year": 2020 }"#).unwrap();
    assert_eq!(n.year, Some(2020));
    let s: SearchHit = serde_json::from_str(r#"{ "year": "2019" }"#).unwrap();
    assert_eq!(s.year, Some(2019));
}

#[test]
fn sort_option_uses_lowercase_wire_names() {
    assert_eq!(
        serde_json::to_string(&SortOption::Newest).unwrap(),
        "\"newest\""
    );
    let parsed: SortOption = serde_json::from_str("\"cited\"").unwrap();
    assert_eq!(parsed, SortOption::Cited);
}

#[test]
fn selection_key_falls_back_to_position() {
    let with_id = hit("W123", "t", &[], 2020, None);
    assert_eq!(with_id.selection_key(4), "W123");
    let without_id = SearchHit::default();
    assert_eq!(without_id.selection_key(4), "row-4");
}

// =============================================================
// In-list filter and column sort
// =============================================================

#[test]
fn matches_is_case_insensitive_over_title_and_authors() {
    let h = hit("1", "Climate adaptation", &["Oliveira, P."], 2020, None);
    assert!(h.matches("CLIMATE"));
    assert!(h.matches("oliveira"));
    assert!(!h.matches("citros"));
    assert!(h.matches("  "));
}

#[test]
fn sort_hits_by_year_descending() {
    let mut hits = vec![
        hit("1", "a", &[], 2018, None),
        hit("2", "b", &[], 2024, None),
        hit("3", "c", &[], 2020, None),
    ];
    sort_hits(&mut hits, HitColumn::Year, false);
    let years: Vec<i64> = hits.iter().filter_map(|h| h.year).collect();
    assert_eq!(years, vec![2024, 2020, 2018]);
}

#[test]
fn sort_hits_by_title_is_case_insensitive() {
    let mut hits = vec![
        hit("1", "banana", &[], 2020, None),
        hit("2", "Abacaxi", &[], 2020, None),
    ];
    sort_hits(&mut hits, HitColumn::Title, true);
    assert_eq!(hits[0].title.as_deref(), Some("Abacaxi"));
}

#[test]
fn hit_column_parses_header_ids() {
    assert_eq!(HitColumn::parse("year"), Some(HitColumn::Year));
    assert_eq!(HitColumn::parse("doi"), Some(HitColumn::Doi));
    assert_eq!(HitColumn::parse("bogus"), None);
}

// =============================================================
// BibTeX export
// =============================================================

#[test]
fn bibtex_keys_from_doi_suffix() {
    let hits = [hit(
        "1",
        "Manejo",
        &["Silva", "Souza"],
        2021,
        Some("10.1000/xyz123"),
    )];
    let out = bibtex(&hits);
    assert!(out.starts_with("@article{xyz123,"));
    assert!(out.contains("author = {Silva and Souza}"));
    assert!(out.contains("year = {2021}"));
}

#[test]
fn bibtex_falls_back_to_positional_key() {
    let hits = [hit("1", "Sem DOI", &[], 2020, None)];
    let out = bibtex(&hits);
    assert!(out.starts_with("@article{article_0,"));
    assert!(out.contains("journal = {Unknown}"));
}
