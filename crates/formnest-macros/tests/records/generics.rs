use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
struct Page<T> {
    total: usize,
    items: Vec<T>,
}

#[test]
fn test_generic_struct() {
    let doc = FormDocument::parse("total=2&items[0]=4&items[1]=5", &Default::default()).unwrap();
    assert_eq!(
        doc.bind::<Page<u8>>(),
        Page {
            total: 2,
            items: vec![4, 5],
        }
    );
}
