use super::*;

fn record(
    manual: &str,
    document_url: &str,
    ai_approved: &str,
    rejected: &str,
) -> ArticleRecord {
    ArticleRecord {
        manual_approved: Some(manual.to_owned()),
        document_url: Some(document_url.to_owned()),
        ai_approved: Some(ai_approved.to_owned()),
        rejected: Some(rejected.to_owned()),
        ..ArticleRecord::default()
    }
}

// =============================================================
// Precedence order
// =============================================================

#[test]
fn manual_approval_wins_over_everything() {
    // Even with no local file and both AI flags set.
    let r = record("TRUE", "", "TRUE", "TRUE");
    assert_eq!(CurationStatus::derive(&r), CurationStatus::ManualApproved);
}

#[test]
fn missing_local_document_masks_ai_outcome() {
    let r = record("", "", "TRUE", "TRUE");
    assert_eq!(CurationStatus::derive(&r), CurationStatus::Unavailable);

    let external = record("", "https://example.org/paper.pdf", "TRUE", "");
    assert_eq!(
        CurationStatus::derive(&external),
        CurationStatus::Unavailable
    );
}

#[test]
fn ai_approval_beats_ai_rejection() {
    let r = record("", "paper.pdf", "TRUE", "TRUE");
    assert_eq!(CurationStatus::derive(&r), CurationStatus::ApprovedAi);
}

#[test]
fn ai_rejection_when_not_approved() {
    let r = record("", "paper.pdf", "", "sim");
    assert_eq!(CurationStatus::derive(&r), CurationStatus::RejectedAi);
}

#[test]
fn no_flags_is_pending() {
    let r = record("", "paper.pdf", "", "");
    assert_eq!(CurationStatus::derive(&r), CurationStatus::Pending);
}

#[test]
fn derivation_is_total_on_empty_record() {
    // No flags at all: no document reference, so unavailable.
    assert_eq!(
        CurationStatus::derive(&ArticleRecord::default()),
        CurationStatus::Unavailable
    );
}

#[test]
fn five_record_scenario() {
    let records = [
        record("true", "", "", ""),
        record("", "", "", ""),
        record("", "doc3.pdf", "true", ""),
        record("", "doc4.pdf", "", "true"),
        record("", "doc5.pdf", "", ""),
    ];
    let derived: Vec<CurationStatus> =
        records.iter().map(CurationStatus::derive).collect();
    assert_eq!(
        derived,
        vec![
            CurationStatus::ManualApproved,
            CurationStatus::Unavailable,
            CurationStatus::ApprovedAi,
            CurationStatus::RejectedAi,
            CurationStatus::Pending,
        ]
    );
}

// =============================================================
// Tags and display metadata
// =============================================================

#[test]
fn tags_round_trip() {
    for status in CurationStatus::all() {
        assert_eq!(CurationStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(CurationStatus::parse("unknown"), None);
}

#[test]
fn info_labels_and_tones() {
    assert_eq!(
        CurationStatus::ManualApproved.info().label,
        "Aprovado Manualmente"
    );
    assert_eq!(CurationStatus::ApprovedAi.info().tone, Tone::Success);
    assert_eq!(CurationStatus::RejectedAi.info().tone, Tone::Error);
    assert_eq!(CurationStatus::Pending.info().icon, Icon::Hourglass);
    assert_eq!(CurationStatus::Unavailable.info().icon, Icon::Block);
}
