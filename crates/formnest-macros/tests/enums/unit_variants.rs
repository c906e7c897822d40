use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
#[form(rename_all = "lowercase")]
enum Action {
    #[default]
    Add,
    Update,
    #[form(rename = "del")]
    Delete,
}

#[derive(Debug, Default, PartialEq, FromForm)]
struct Event {
    action: Action,
    actions: Vec<Action>,
}

#[test]
fn test_unit_variants() {
    let doc = FormDocument::parse(
        "action=update&actions[0]=del&actions[1]=add",
        &Default::default(),
    )
    .unwrap();
    assert_eq!(
        doc.bind::<Event>(),
        Event {
            action: Action::Update,
            actions: vec![Action::Delete, Action::Add],
        }
    );
}

#[test]
fn test_unknown_variant_defaults() {
    let doc = FormDocument::parse("action=Delete", &Default::default()).unwrap();
    let (event, warnings) = doc.bind_with_report::<Event>();
    assert_eq!(event.action, Action::Add);
    assert_eq!(warnings[0].path, "action");
}
