use std::collections::BTreeMap;

use formnest::document::bind::BindWarningKind;
use formnest::{FormValue, FromForm, Parser};

#[derive(Debug, Default, PartialEq, FromForm)]
struct Account {
    subdomain: String,
    id: u64,
}

#[derive(Debug, Default, PartialEq, FromForm)]
#[form(rename_all = "camelCase")]
struct CustomField {
    id: u64,
    field_name: String,
    values: Vec<FieldValue>,
}

#[derive(Debug, Default, PartialEq, FromForm)]
struct FieldValue {
    value: String,
    #[form(rename = "enum")]
    enum_id: Option<u64>,
}

#[derive(Debug, Default, PartialEq, FromForm)]
#[form(rename_all = "snake_case")]
enum Status {
    #[default]
    Open,
    InProgress,
    #[form(rename = "won")]
    Closed,
}

#[derive(Debug, Default, PartialEq, FromForm)]
struct Lead {
    id: u64,
    name: String,
    #[form(rename = "user_id")]
    owner: u32,
    status: Status,
    tags: Vec<String>,
    custom_fields: Vec<CustomField>,
    #[form(skip)]
    seen: bool,
}

#[derive(Debug, Default, PartialEq, FromForm)]
struct Webhook {
    account: Account,
    leads: Vec<Lead>,
    extra: BTreeMap<String, FormValue>,
}

#[test]
fn test_bind_webhook() {
    let form = "account[subdomain]=example&account[id]=123\
        &leads[0][id]=1&leads[0][name]=A&leads[0][user_id]=9&leads[0][status]=in_progress\
        &leads[0][tags][0]=urgent\
        &leads[0][custom_fields][0][id]=5&leads[0][custom_fields][0][fieldName]=Color\
        &leads[0][custom_fields][0][values][0][value]=red&leads[0][custom_fields][0][values][0][enum]=12\
        &leads[1][id]=2&leads[1][status]=won\
        &extra[k]=v&extra[n]=3";
    let webhook: Webhook = Parser::new().parse_form(form).unwrap();
    assert_eq!(
        webhook,
        Webhook {
            account: Account {
                subdomain: "example".to_string(),
                id: 123,
            },
            leads: vec![
                Lead {
                    id: 1,
                    name: "A".to_string(),
                    owner: 9,
                    status: Status::InProgress,
                    tags: vec!["urgent".to_string()],
                    custom_fields: vec![CustomField {
                        id: 5,
                        field_name: "Color".to_string(),
                        values: vec![FieldValue {
                            value: "red".to_string(),
                            enum_id: Some(12),
                        }],
                    }],
                    seen: false,
                },
                Lead {
                    id: 2,
                    status: Status::Closed,
                    ..Default::default()
                },
            ],
            extra: BTreeMap::from([
                ("k".to_string(), FormValue::String("v".to_string())),
                ("n".to_string(), FormValue::Integer(3)),
            ]),
        }
    );
}

#[test]
fn test_declared_type_wins_over_coercion() {
    #[derive(Debug, Default, FromForm)]
    struct Form {
        code: String,
        flag: bool,
        ratio: f64,
    }

    let form: Form = Parser::new()
        .parse_form("code=007&flag=1&ratio=3")
        .unwrap();
    assert_eq!(form.code, "007");
    assert!(form.flag);
    assert_eq!(form.ratio, 3.0);
}

#[test]
fn test_invalid_fields_default_with_report() {
    let (account, warnings) = Parser::new()
        .parse_form_with_report::<Account>("subdomain[x]=1&id=abc")
        .unwrap();
    assert_eq!(account, Account::default());
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].path, "subdomain");
    assert!(matches!(warnings[0].kind, BindWarningKind::Uncoercible { .. }));
    assert_eq!(warnings[1].path, "id");
    assert!(matches!(warnings[1].kind, BindWarningKind::Uncoercible { .. }));
}

#[test]
fn test_missing_fields_are_reported() {
    let (webhook, warnings) = Parser::new()
        .parse_form_with_report::<Webhook>("leads[1][id]=4")
        .unwrap();
    assert_eq!(webhook.leads.len(), 2);
    assert_eq!(webhook.leads[0], Lead::default());
    assert_eq!(webhook.leads[1].id, 4);
    let missing: Vec<_> = warnings
        .iter()
        .filter(|w| w.kind == BindWarningKind::Missing)
        .map(|w| w.path.as_str())
        .collect();
    assert!(missing.contains(&"account"));
    assert!(missing.contains(&"leads[1][name]"));
    assert!(missing.contains(&"leads[1][user_id]"));
}

#[test]
fn test_unknown_enum_value_defaults() {
    #[derive(Debug, Default, FromForm)]
    struct Form {
        status: Status,
    }

    let form: Form = Parser::new().parse_form("status=lost").unwrap();
    assert_eq!(form.status, Status::Open);
}

#[test]
fn test_bind_from_bytes() {
    let account: Account = Parser::new()
        .parse_form_bytes(b"subdomain=acme&id=29")
        .unwrap();
    assert_eq!(
        account,
        Account {
            subdomain: "acme".to_string(),
            id: 29,
        }
    );
}
