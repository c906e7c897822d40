use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
struct Lead {
    #[form(rename = "user_id")]
    responsible_user: u64,
    #[form(rename = "type")]
    kind: String,
}

#[test]
fn test_rename_field() {
    let doc = FormDocument::parse("user_id=504141&type=lead", &Default::default()).unwrap();
    assert_eq!(
        doc.bind::<Lead>(),
        Lead {
            responsible_user: 504141,
            kind: "lead".to_string(),
        }
    );
}

#[test]
fn test_declared_name_is_not_used() {
    let doc =
        FormDocument::parse("responsible_user=1&kind=x", &Default::default()).unwrap();
    assert_eq!(doc.bind::<Lead>(), Lead::default());
}
