use super::*;

fn record(row: i64, title: &str, authors: &str, category: &str, doc: &str) -> ArticleRecord {
    ArticleRecord {
        row_number: Some(row),
        title: Some(title.to_owned()),
        authors: Some(authors.to_owned()),
        category: Some(category.to_owned()),
        document_url: Some(doc.to_owned()),
        ..ArticleRecord::default()
    }
}

fn sample() -> Vec<ArticleRecord> {
    vec![
        record(3, "Adubação em citros", "Silva", "BIOINSUMOS", "a.pdf"),
        record(1, "Manejo de solos", "Souza", "MANEJO DE NUTRIENTES E AGUA", "b.pdf"),
        record(2, "Irrigação de cana", "Silva; Lima", "BIOINSUMOS", ""),
    ]
}

// =============================================================
// Conjunctive filtering
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let filter = RecordFilter::default();
    assert!(sample().iter().all(|r| filter.matches(r)));
}

#[test]
fn status_filter_matches_derived_status() {
    let filter = RecordFilter {
        status: StatusFilter::Only(CurationStatus::Unavailable),
        ..RecordFilter::default()
    };
    let visible = filtered(&sample(), &filter, SortOrder::Asc);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].row_number, Some(2));
}

#[test]
fn category_filter_is_exact() {
    let filter = RecordFilter {
        category: Some("BIOINSUMOS".to_owned()),
        ..RecordFilter::default()
    };
    let visible = filtered(&sample(), &filter, SortOrder::Asc);
    assert_eq!(visible.len(), 2);
}

#[test]
fn text_query_matches_title_or_author_case_insensitive() {
    let by_title = RecordFilter {
        query: "SOLOS".to_owned(),
        ..RecordFilter::default()
    };
    assert_eq!(filtered(&sample(), &by_title, SortOrder::Asc).len(), 1);

    let by_author = RecordFilter {
        query: "silva".to_owned(),
        ..RecordFilter::default()
    };
    assert_eq!(filtered(&sample(), &by_author, SortOrder::Asc).len(), 2);
}

#[test]
fn filters_compose_conjunctively() {
    // "silva" matches rows 3 and 2; BIOINSUMOS matches rows 3 and 2;
    // pending status keeps only row 3 (row 2 has no document).
    let filter = RecordFilter {
        status: StatusFilter::Only(CurationStatus::Pending),
        category: Some("BIOINSUMOS".to_owned()),
        query: "silva".to_owned(),
    };
    let visible = filtered(&sample(), &filter, SortOrder::Asc);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].row_number, Some(3));
}

#[test]
fn no_match_yields_empty_without_touching_input() {
    let records = sample();
    let filter = RecordFilter {
        query: "climate".to_owned(),
        ..RecordFilter::default()
    };
    let visible = filtered(&records, &filter, SortOrder::Asc);
    assert!(visible.is_empty());
    assert_eq!(records.len(), 3);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_is_fixed_on_row_number() {
    let asc = filtered(&sample(), &RecordFilter::default(), SortOrder::Asc);
    let rows: Vec<i64> = asc.iter().filter_map(|r| r.row_number).collect();
    assert_eq!(rows, vec![1, 2, 3]);

    let desc = filtered(&sample(), &RecordFilter::default(), SortOrder::Desc);
    let rows: Vec<i64> = desc.iter().filter_map(|r| r.row_number).collect();
    assert_eq!(rows, vec![3, 2, 1]);
}

#[test]
fn sort_order_toggles() {
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn paginate_is_a_pure_slice() {
    let items: Vec<i32> = (0..10).collect();
    assert_eq!(paginate(&items, 0, 4), vec![0, 1, 2, 3]);
    assert_eq!(paginate(&items, 1, 4), vec![4, 5, 6, 7]);
    assert_eq!(paginate(&items, 2, 4), vec![8, 9]);
    assert_eq!(paginate(&items, 3, 4), Vec::<i32>::new());
}

#[test]
fn adjacent_pages_never_duplicate_or_omit() {
    let items: Vec<i32> = (0..23).collect();
    let per_page = 5;
    let mut seen = Vec::new();
    for page in 0..5 {
        seen.extend(paginate(&items, page, per_page));
    }
    assert_eq!(seen, items);
}

#[test]
fn zero_page_size_is_empty() {
    let items = [1, 2, 3];
    assert_eq!(paginate(&items, 0, 0), Vec::<i32>::new());
}

// =============================================================
// Summary and categories
// =============================================================

#[test]
fn summary_buckets_match_derivation() {
    let mut records = sample();
    records[0].ai_approved = Some("TRUE".to_owned());
    records[1].rejected = Some("TRUE".to_owned());
    let summary = summarize(&records);
    assert_eq!(summary.approved, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.unavailable, 1);
    assert_eq!(summary.pending, 0);
}

#[test]
fn approved_bucket_combines_manual_and_ai() {
    let mut records = sample();
    records[0].ai_approved = Some("TRUE".to_owned());
    records[1].manual_approved = Some("TRUE".to_owned());
    assert_eq!(summarize(&records).approved, 2);
}

#[test]
fn categories_are_unique_and_sorted() {
    assert_eq!(
        categories(&sample()),
        vec![
            "BIOINSUMOS".to_owned(),
            "MANEJO DE NUTRIENTES E AGUA".to_owned()
        ]
    );
}

#[test]
fn blank_categories_are_ignored() {
    let mut records = sample();
    records[0].category = Some("  ".to_owned());
    records[1].category = None;
    assert_eq!(categories(&records), vec!["BIOINSUMOS".to_owned()]);
}
