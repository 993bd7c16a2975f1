use super::*;

// =============================================================
// Role wire format
// =============================================================

#[test]
fn known_roles_round_trip() {
    for role in Role::options() {
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn unknown_roles_are_preserved() {
    let parsed: Role = serde_json::from_str("\"curadoria_boaretto\"").unwrap();
    assert_eq!(parsed, Role::Other("curadoria_boaretto".to_owned()));
    assert_eq!(
        serde_json::to_string(&parsed).unwrap(),
        "\"curadoria_boaretto\""
    );
}

#[test]
fn only_admin_is_admin() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Cientometria.is_admin());
    assert!(!Role::Other("admin2".to_owned()).is_admin());
}

// =============================================================
// Account decoding
// =============================================================

#[test]
fn account_id_accepts_number_or_string() {
    let numeric: UserAccount = serde_json::from_str(
        r#"{ "id": 3, "username": "ana", "role": "admin" }"#,
    )
    .unwrap();
    assert_eq!(numeric.id, "3");

    let text: UserAccount = serde_json::from_str(
        r#"{ "id": "u-3", "username": "ana", "role": "admin" }"#,
    )
    .unwrap();
    assert_eq!(text.id, "u-3");
}

#[test]
fn allowed_categories_accepts_three_encodings() {
    let array: UserAccount = serde_json::from_str(
        r#"{ "id": 1, "username": "a", "role": "cientometria",
             "allowed_categories": ["BIOINSUMOS"] }"#,
    )
    .unwrap();
    assert_eq!(array.allowed_categories, vec!["BIOINSUMOS"]);

    let json_string: UserAccount = serde_json::from_str(
        r#"{ "id": 1, "username": "a", "role": "cientometria",
             "allowed_categories": "[\"BIOINSUMOS\"]" }"#,
    )
    .unwrap();
    assert_eq!(json_string.allowed_categories, vec!["BIOINSUMOS"]);

    let comma: UserAccount = serde_json::from_str(
        r#"{ "id": 1, "username": "a", "role": "cientometria",
             "allowed_categories": "BIOINSUMOS, MANEJO DE NUTRIENTES E AGUA" }"#,
    )
    .unwrap();
    assert_eq!(
        comma.allowed_categories,
        vec!["BIOINSUMOS", "MANEJO DE NUTRIENTES E AGUA"]
    );
}

#[test]
fn missing_categories_means_global() {
    let account: UserAccount = serde_json::from_str(
        r#"{ "id": 1, "username": "a", "role": "cientometria" }"#,
    )
    .unwrap();
    assert!(account.allowed_categories.is_empty());
    assert_eq!(account.categories_label(), "Todas (Global)");
}

#[test]
fn empty_json_array_string_means_global() {
    let account: UserAccount = serde_json::from_str(
        r#"{ "id": 1, "username": "a", "role": "cientometria",
             "allowed_categories": "[]" }"#,
    )
    .unwrap();
    assert!(account.allowed_categories.is_empty());
}

#[test]
fn categories_label_joins_restrictions() {
    let account = UserAccount {
        id: "1".to_owned(),
        username: "a".to_owned(),
        email: None,
        role: Role::CuradoriaSolos,
        allowed_categories: vec!["A".to_owned(), "B".to_owned()],
    };
    assert_eq!(account.categories_label(), "A, B");
}
