use formnest::FromForm;

#[allow(dead_code)]
struct Option;
#[allow(dead_code)]
struct Some;
#[allow(dead_code)]
struct None;

#[derive(Default, FromForm)]
struct Lead {
    id: u64,
    name: String,
}

#[derive(Default, FromForm)]
struct LeadId(u64);

#[derive(Default, FromForm)]
struct Point(i32, i32);

#[derive(Default, FromForm)]
enum Status {
    #[default]
    Open,
    Closed,
}

fn main() {
    let doc = formnest::FormDocument::new();
    let _: Lead = doc.bind();
    let _: LeadId = doc.bind();
    let _: Point = doc.bind();
    let _: Status = doc.bind();
}
