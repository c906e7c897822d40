use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
#[form(rename_all = "camelCase")]
struct Contact {
    first_name: String,
    last_name: String,
    #[form(rename = "ID")]
    contact_id: u32,
}

#[test]
fn test_rename_all_camel_case() {
    let doc = FormDocument::parse("firstName=Ada&lastName=Lovelace&ID=1", &Default::default())
        .unwrap();
    assert_eq!(
        doc.bind::<Contact>(),
        Contact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            contact_id: 1,
        }
    );
}
