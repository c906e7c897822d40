use formnest::FromForm;

#[derive(Default, FromForm)]
struct Lead {
    id: u64,
    tags: Vec<String>,
}

fn main() {
    let _: Lead = formnest::FormDocument::new().bind();
}
