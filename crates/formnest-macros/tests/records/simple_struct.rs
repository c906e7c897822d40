use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
struct Account {
    subdomain: String,
    id: u64,
    active: bool,
}

fn document(form: &str) -> FormDocument {
    FormDocument::parse(form, &Default::default()).unwrap()
}

#[test]
fn test_simple_struct() {
    let doc = document("subdomain=acme&id=29&active=Y");
    // `Y` is not a boolean literal
    let (account, warnings) = doc.bind_with_report::<Account>();
    assert_eq!(
        account,
        Account {
            subdomain: "acme".to_string(),
            id: 29,
            active: false,
        }
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].path, "active");
}

#[test]
fn test_nested_struct() {
    #[derive(Debug, Default, PartialEq, FromForm)]
    struct Payload {
        account: Account,
    }

    let doc = document("account[subdomain]=acme&account[id]=1&account[active]=true");
    assert_eq!(
        doc.bind::<Payload>(),
        Payload {
            account: Account {
                subdomain: "acme".to_string(),
                id: 1,
                active: true,
            },
        }
    );
}

#[test]
fn test_scalar_node_is_not_a_record() {
    #[derive(Debug, Default, PartialEq, FromForm)]
    struct Payload {
        account: Account,
    }

    let (payload, warnings) = document("account=7").bind_with_report::<Payload>();
    assert_eq!(payload, Payload::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].path, "account");
}
