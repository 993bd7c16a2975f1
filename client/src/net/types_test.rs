use super::*;

#[test]
fn login_response_uses_camel_case_token_key() {
    let body: LoginResponse =
        serde_json::from_str(r#"{ "accessToken": "abc.def.ghi" }"#).unwrap();
    assert_eq!(body.access_token, "abc.def.ghi");
}

#[test]
fn analysis_outcome_carries_updated_article() {
    let body: AnalysisOutcome = serde_json::from_str(
        r#"{ "message": "ok", "updatedArticle": { "__row_number": 5, "Titulo": "t" } }"#,
    )
    .unwrap();
    assert_eq!(body.updated_article.row_number, Some(5));
    assert_eq!(body.message.as_deref(), Some("ok"));
}

#[test]
fn ack_falls_back_when_message_missing() {
    let ack: Ack = serde_json::from_str("{}").unwrap();
    assert_eq!(ack.message_or("feito"), "feito");
    let ack: Ack = serde_json::from_str(r#"{ "message": "processado" }"#).unwrap();
    assert_eq!(ack.message_or("feito"), "processado");
}

#[test]
fn error_message_prefers_node_error_key() {
    assert_eq!(
        error_message(400, r#"{ "error": "linha inválida" }"#),
        "linha inválida"
    );
}

#[test]
fn error_message_accepts_fastapi_detail_key() {
    assert_eq!(
        error_message(422, r#"{ "detail": "arquivo ausente" }"#),
        "arquivo ausente"
    );
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
    assert_eq!(error_message(500, "{}"), "HTTP 500");
}
