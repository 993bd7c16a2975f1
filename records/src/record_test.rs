use super::*;

fn sample_json() -> &'static str {
    r#"{
        "__row_number": 7,
        "Titulo": "Manejo de solos em citros",
        "Autor(es)": "Silva, J.; Souza, M.",
        "Ano": "2021",
        "CATEGORIA": "BIOINSUMOS",
        "URL DO DOCUMENTO": "artigo_7.pdf",
        "APROVAÇÃO CURADOR (marcar)": "TRUE",
        "APROVAÇÃO MANUAL": "",
        "ARTIGOS REJEITADOS": "",
        "Coluna Nova": "valor"
    }"#
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn decodes_portuguese_column_names() {
    let record: ArticleRecord = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(record.row_number, Some(7));
    assert_eq!(record.title.as_deref(), Some("Manejo de solos em citros"));
    assert_eq!(record.authors.as_deref(), Some("Silva, J.; Souza, M."));
    assert_eq!(record.category.as_deref(), Some("BIOINSUMOS"));
    assert_eq!(record.document_url.as_deref(), Some("artigo_7.pdf"));
}

#[test]
fn unknown_columns_land_in_extra() {
    let record: ArticleRecord = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(
        record.extra.get("Coluna Nova"),
        Some(&serde_json::Value::String("valor".to_owned()))
    );
}

#[test]
fn row_number_accepts_digit_strings() {
    let record: ArticleRecord =
        serde_json::from_str(r#"{ "__row_number": "42", "Titulo": "x" }"#).unwrap();
    assert_eq!(record.row_number, Some(42));
}

#[test]
fn row_number_blank_string_is_none() {
    let record: ArticleRecord =
        serde_json::from_str(r#"{ "__row_number": "  ", "Titulo": "x" }"#).unwrap();
    assert_eq!(record.row_number, None);
}

#[test]
fn empty_object_decodes_to_default() {
    let record: ArticleRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(record, ArticleRecord::default());
}

#[test]
fn serialization_skips_absent_columns() {
    let record = ArticleRecord {
        title: Some("Só título".to_owned()),
        ..ArticleRecord::default()
    };
    let json = serde_json::to_value(&record).unwrap();
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["Titulo"], "Só título");
}

// =============================================================
// Flag normalization
// =============================================================

#[test]
fn flag_set_accepts_known_spellings() {
    for raw in ["TRUE", "true", " True ", "sim", "SIM", "1"] {
        assert!(flag_set(Some(raw)), "expected {raw:?} to be set");
    }
}

#[test]
fn flag_set_rejects_everything_else() {
    for raw in ["", "false", "não", "0", "yes", "aprovado"] {
        assert!(!flag_set(Some(raw)), "expected {raw:?} to be unset");
    }
    assert!(!flag_set(None));
}

// =============================================================
// Local document detection
// =============================================================

#[test]
fn local_file_name_is_local_document() {
    let record = ArticleRecord {
        document_url: Some("artigo_7.pdf".to_owned()),
        ..ArticleRecord::default()
    };
    assert!(record.has_local_document());
}

#[test]
fn http_url_is_not_local() {
    let record = ArticleRecord {
        document_url: Some("https://drive.google.com/file/d/abc/view".to_owned()),
        ..ArticleRecord::default()
    };
    assert!(!record.has_local_document());
}

#[test]
fn empty_or_missing_reference_is_not_local() {
    let blank = ArticleRecord {
        document_url: Some("   ".to_owned()),
        ..ArticleRecord::default()
    };
    assert!(!blank.has_local_document());
    assert!(!ArticleRecord::default().has_local_document());
}

// =============================================================
// Extraction merge
// =============================================================

#[test]
fn merge_extracted_fills_and_overwrites_non_empty() {
    let mut form = ArticleRecord {
        title: Some("Título digitado".to_owned()),
        year: Some("2019".to_owned()),
        ..ArticleRecord::default()
    };
    let extracted = ArticleRecord {
        title: Some("Título extraído".to_owned()),
        authors: Some("Silva, J.".to_owned()),
        year: Some("  ".to_owned()),
        ..ArticleRecord::default()
    };
    form.merge_extracted(&extracted);
    assert_eq!(form.title.as_deref(), Some("Título extraído"));
    assert_eq!(form.authors.as_deref(), Some("Silva, J."));
    // Blank extraction values never clobber the form.
    assert_eq!(form.year.as_deref(), Some("2019"));
}

#[test]
fn merge_extracted_leaves_row_number_and_flags() {
    let mut form = ArticleRecord {
        row_number: Some(12),
        manual_approved: Some("TRUE".to_owned()),
        ..ArticleRecord::default()
    };
    form.merge_extracted(&ArticleRecord {
        title: Some("t".to_owned()),
        ..ArticleRecord::default()
    });
    assert_eq!(form.row_number, Some(12));
    assert_eq!(form.manual_approved.as_deref(), Some("TRUE"));
}

// =============================================================
// Display fields
// =============================================================

#[test]
fn display_fields_excludes_flags_and_internal_keys() {
    let record: ArticleRecord = serde_json::from_str(sample_json()).unwrap();
    let fields = record.display_fields();
    let labels: Vec<&str> = fields.iter().map(|(label, _)| label.as_str()).collect();
    assert!(labels.contains(&"Autor(es)"));
    assert!(labels.contains(&"Coluna Nova"));
    assert!(!labels.iter().any(|l| l.contains("APROVAÇÃO")));
    assert!(!labels.contains(&"__row_number"));
    assert!(!labels.contains(&"Titulo"));
}

#[test]
fn display_fields_skips_empty_values() {
    let record = ArticleRecord {
        authors: Some("  ".to_owned()),
        year: Some("2020".to_owned()),
        ..ArticleRecord::default()
    };
    let fields = record.display_fields();
    assert_eq!(fields, vec![("Ano".to_owned(), "2020".to_owned())]);
}
