use formnest::{FormDocument, FromForm};

#[derive(Debug, Default, PartialEq, FromForm)]
struct LeadId(u64);

#[derive(Debug, Default, PartialEq, FromForm)]
struct Point(i32, i32);

#[derive(Debug, Default, PartialEq, FromForm)]
struct Shape {
    id: LeadId,
    origin: Point,
}

#[test]
fn test_newtype_and_tuple() {
    let doc = FormDocument::parse("id=9&origin[0]=-1&origin[1]=2", &Default::default()).unwrap();
    assert_eq!(
        doc.bind::<Shape>(),
        Shape {
            id: LeadId(9),
            origin: Point(-1, 2),
        }
    );
}

#[test]
fn test_tuple_missing_element() {
    let doc = FormDocument::parse("origin[1]=2", &Default::default()).unwrap();
    let (shape, warnings) = doc.bind_with_report::<Shape>();
    assert_eq!(shape.origin, Point(0, 2));
    let paths: Vec<_> = warnings.iter().map(|w| w.path.as_str()).collect();
    assert_eq!(paths, vec!["id", "origin[0]"]);
}
