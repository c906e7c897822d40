use formnest_document::FormDocument;
use formnest_macros::FromForm;

#[derive(Default, FromForm)]
#[form(crate = ::formnest_document)]
struct Config {
    name: String,
}

#[derive(Default, FromForm)]
#[form(crate = ::formnest_document)]
enum Status {
    #[default]
    Active,
    Inactive,
}

fn main() {
    let doc = FormDocument::new();
    let _: Config = doc.bind();
    let _: Status = doc.bind();
}
