use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
struct Lead {
    id: u64,
    #[form(skip)]
    cached: Option<String>,
}

#[test]
fn test_skipped_field_keeps_default() {
    let (lead, warnings) = FormDocument::parse("id=3&cached=x", &Default::default())
        .unwrap()
        .bind_with_report::<Lead>();
    assert_eq!(lead, Lead { id: 3, cached: None });
    assert!(warnings.is_empty());
}
