use formnest_document::{
    BindWarning, Config as DocumentConfig, FlatCorpus, FormDocument, FormValue, FromForm, Map,
};
use formnest_json::Config as JsonConfig;
use tracing::debug;

use crate::Error;
use crate::preprocess::prepare_encoded;

/// Entry point for parsing form data.
///
/// A `Parser` only holds configuration. Every call builds its own document.
///
/// ```
/// use formnest::{FromForm, Parser};
///
/// #[derive(Debug, Default, FromForm)]
/// struct Account {
///     subdomain: String,
///     id: u64,
/// }
///
/// #[derive(Debug, Default, FromForm)]
/// struct Payload {
///     account: Account,
/// }
///
/// let payload: Payload = Parser::new()
///     .parse_form("account[subdomain]=acme&account[id]=29")
///     .unwrap();
/// assert_eq!(payload.account.subdomain, "acme");
/// assert_eq!(payload.account.id, 29);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parser {
    document: DocumentConfig,
    json: JsonConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_config(mut self, config: DocumentConfig) -> Self {
        self.document = config;
        self
    }

    pub fn with_json_config(mut self, config: JsonConfig) -> Self {
        self.json = config;
        self
    }

    pub fn document_config(&self) -> &DocumentConfig {
        &self.document
    }

    pub fn json_config(&self) -> &JsonConfig {
        &self.json
    }

    /// Decode form-urlencoded text into a document.
    pub fn document(&self, form_data: &str) -> Result<FormDocument, Error> {
        let corpus = FlatCorpus::parse(form_data)?;
        debug!(
            entries = corpus.len(),
            discarded = corpus.discarded(),
            "decoded form data"
        );
        Ok(FormDocument::from_corpus(&corpus, &self.document))
    }

    /// Like [`Parser::document`], for payloads carrying `\uXXXX` escapes, a
    /// second layer of URL encoding, or `key = value` lines.
    pub fn document_encoded(&self, encoded_data: &str) -> Result<FormDocument, Error> {
        self.document(&prepare_encoded(encoded_data)?)
    }

    /// Bind form data into `T`. Only decoding can fail; fields that are
    /// missing or invalid take their default value.
    pub fn parse_form<T: FromForm>(&self, form_data: &str) -> Result<T, Error> {
        Ok(self.document(form_data)?.bind())
    }

    pub fn parse_form_bytes<T: FromForm>(&self, data: &[u8]) -> Result<T, Error> {
        self.parse_form(&String::from_utf8_lossy(data))
    }

    /// Bind form data into `T`, also returning the fields that fell back to
    /// their default value.
    pub fn parse_form_with_report<T: FromForm>(
        &self,
        form_data: &str,
    ) -> Result<(T, Vec<BindWarning>), Error> {
        Ok(self.document(form_data)?.bind_with_report())
    }

    pub fn form_to_value(&self, form_data: &str) -> Result<FormValue, Error> {
        Ok(self.document(form_data)?.to_value())
    }

    pub fn form_to_map(&self, form_data: &str) -> Result<Map<String, FormValue>, Error> {
        Ok(self.document(form_data)?.to_map())
    }

    pub fn form_to_map_bytes(&self, data: &[u8]) -> Result<Map<String, FormValue>, Error> {
        self.form_to_map(&String::from_utf8_lossy(data))
    }

    /// Convert form data into JSON text indented by two spaces, keys sorted.
    pub fn form_to_json(&self, form_data: &str) -> Result<String, Error> {
        let value = self.form_to_value(form_data)?;
        Ok(formnest_json::to_string_pretty(&value, &self.json)?)
    }

    pub fn form_to_json_bytes(&self, data: &[u8]) -> Result<String, Error> {
        self.form_to_json(&String::from_utf8_lossy(data))
    }

    pub fn form_to_map_encoded(&self, encoded_data: &str) -> Result<Map<String, FormValue>, Error> {
        Ok(self.document_encoded(encoded_data)?.to_map())
    }

    pub fn form_to_map_encoded_bytes(&self, data: &[u8]) -> Result<Map<String, FormValue>, Error> {
        self.form_to_map_encoded(&String::from_utf8_lossy(data))
    }

    pub fn form_to_json_encoded(&self, encoded_data: &str) -> Result<String, Error> {
        let value = self.document_encoded(encoded_data)?.to_value();
        Ok(formnest_json::to_string_pretty(&value, &self.json)?)
    }

    pub fn form_to_json_encoded_bytes(&self, data: &[u8]) -> Result<String, Error> {
        self.form_to_json_encoded(&String::from_utf8_lossy(data))
    }
}
