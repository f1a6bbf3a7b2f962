use crate::core::{ConfigProvider, ExportResult, HeaderEntry, Pipeline, RawDocument, Storage};
use crate::utils::error::{ExportError, Result};
use serde::de::{self, IgnoredAny, Unexpected};
use serde_json::error::Category;
use serde_json::value::RawValue;
use std::io::Write;

pub const CONTENT_PREFIX: &str = "content: ";

pub struct HeaderListPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> HeaderListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for HeaderListPipeline<S, C> {
    fn extract(&self) -> Result<RawDocument> {
        let path = self.config.input_path().to_path_buf();
        let bytes = self.storage.read_file(&path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let content = String::from_utf8(bytes)
            .map_err(|source| ExportError::EncodingError { path: path.clone(), source })?;

        Ok(RawDocument { path, content })
    }

    fn echo(&self, document: &RawDocument, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}{}", CONTENT_PREFIX, document.content).map_err(ExportError::OutputError)
    }

    fn transform(&self, document: &RawDocument) -> Result<ExportResult> {
        let entries = parse_entries(&document.content)?;
        tracing::debug!("Projected {} header keys", entries.len());
        Ok(ExportResult::from_entries(entries))
    }

    fn load(&self, result: &ExportResult, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", result.joined).map_err(ExportError::OutputError)?;
        out.flush().map_err(ExportError::OutputError)
    }
}

/// Decodes a header list. Surrounding whitespace is ignored; anything else
/// must be a JSON array of objects carrying a string `key`.
///
/// Fields other than `key` are skipped without being converted, so any
/// syntactically valid JSON is accepted there regardless of number range,
/// unpaired surrogate escapes or nesting depth.
pub fn parse_entries(content: &str) -> Result<Vec<HeaderEntry>> {
    let trimmed = content.trim_matches(is_trimmed_whitespace);

    let items: Vec<&RawValue> = match serde_json::from_str(trimmed) {
        Ok(items) => items,
        Err(e) if e.classify() == Category::Data => {
            // The type check fires before the rest of the document is read.
            serde_json::from_str::<IgnoredAny>(trimmed).map_err(ExportError::SyntaxError)?;
            return Err(ExportError::NotAnArrayError {
                found: json_type_name(trimmed),
            });
        }
        Err(e) => return Err(ExportError::SyntaxError(e)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            decode_entry(raw).map_err(|source| ExportError::InvalidEntryError { index, source })
        })
        .collect()
}

fn decode_entry(raw: &RawValue) -> serde_json::Result<HeaderEntry> {
    let text = raw.get();
    // Serde would otherwise accept `["a"]` as a struct written in sequence form.
    if !text.starts_with('{') {
        return Err(de::Error::invalid_type(
            Unexpected::Other(json_type_name(text)),
            &"a header object",
        ));
    }
    serde_json::from_str(text)
}

/// Unicode `White_Space` without U+0085, plus U+FEFF.
fn is_trimmed_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Names the type of a syntactically valid JSON value from its first byte.
fn json_type_name(value: &str) -> &'static str {
    match value.as_bytes().first() {
        Some(b'{') => "an object",
        Some(b'[') => "an array",
        Some(b'"') => "a string",
        Some(b't' | b'f') => "a boolean",
        Some(b'n') => "null",
        _ => "a number",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    struct MockStorage {
        files: HashMap<PathBuf, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(path), data.to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ExportError::IoError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not in mock"),
                })
        }
    }

    struct FixedInput(PathBuf);

    impl ConfigProvider for FixedInput {
        fn input_path(&self) -> &Path {
            &self.0
        }
    }

    fn pipeline(data: &[u8]) -> HeaderListPipeline<MockStorage, FixedInput> {
        HeaderListPipeline::new(
            MockStorage::with_file("headers.json", data),
            FixedInput(PathBuf::from("headers.json")),
        )
    }

    #[test]
    fn test_extract_keeps_content_verbatim() {
        let document = pipeline(b"  [{\"key\":\"a\"}]\n").extract().unwrap();
        assert_eq!(document.content, "  [{\"key\":\"a\"}]\n");
        assert_eq!(document.path, PathBuf::from("headers.json"));
    }

    #[test]
    fn test_extract_rejects_invalid_utf8() {
        let err = pipeline(&[0x5b, 0xff, 0x5d]).extract().unwrap_err();
        assert!(matches!(err, ExportError::EncodingError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_extract_missing_file() {
        let pipeline = HeaderListPipeline::new(
            MockStorage::with_file("other.json", b"[]"),
            FixedInput(PathBuf::from("headers.json")),
        );
        assert!(matches!(pipeline.extract(), Err(ExportError::IoError { .. })));
    }

    #[test]
    fn test_transform_projects_keys_in_order() {
        let pipeline = pipeline(b"[{\"key\":\"a\"},{\"key\":\"b\"}]");
        let document = pipeline.extract().unwrap();
        let result = pipeline.transform(&document).unwrap();
        assert_eq!(result.joined, "a\nb");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let entries = parse_entries(
            r#"[{"key":"content-type","value":"text/html","enabled":true},{"key":"etag","description":""}]"#,
        )
        .unwrap();
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["content-type", "etag"]);
    }

    #[test]
    fn test_parse_trims_whitespace_and_bom() {
        assert_eq!(parse_entries("\u{feff}\n  []  \n\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_does_not_trim_next_line() {
        assert!(matches!(parse_entries("\u{85}[]"), Err(ExportError::SyntaxError(_))));
        assert!(parse_entries("\u{a0}\u{2028}[]\u{3000}").is_ok());
    }

    #[test]
    fn test_parse_accepts_any_valid_json_in_ignored_fields() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let content = format!(
            r#"[{{"key":"a","value":1e400}},{{"key":"b","description":"\udc00"}},{{"key":"c","nested":{}}}]"#,
            deep
        );

        let entries = parse_entries(&content).unwrap();
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_malformed_object_is_syntax_error() {
        assert!(matches!(parse_entries(r#"{"key": nope}"#), Err(ExportError::SyntaxError(_))));
        assert!(matches!(parse_entries(r#"[{"key":"a"},]"#), Err(ExportError::SyntaxError(_))));
    }

    #[test]
    fn test_parse_scalar_top_level_names_its_type() {
        match parse_entries("42") {
            Err(ExportError::NotAnArrayError { found }) => assert_eq!(found, "a number"),
            other => panic!("expected NotAnArrayError, got {other:?}"),
        }
        match parse_entries("null") {
            Err(ExportError::NotAnArrayError { found }) => assert_eq!(found, "null"),
            other => panic!("expected NotAnArrayError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_json_is_syntax_error() {
        let err = parse_entries("not json").unwrap_err();
        assert!(matches!(err, ExportError::SyntaxError(_)));
        assert_eq!(err.exit_code(), 2);

        assert!(matches!(parse_entries("   "), Err(ExportError::SyntaxError(_))));
    }

    #[test]
    fn test_parse_object_is_shape_error() {
        match parse_entries(r#"{"key":"a"}"#) {
            Err(ExportError::NotAnArrayError { found }) => assert_eq!(found, "an object"),
            other => panic!("expected NotAnArrayError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_entry_without_key_reports_index() {
        match parse_entries(r#"[{"key":"a"},{"name":"b"}]"#) {
            Err(ExportError::InvalidEntryError { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidEntryError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_string_key_and_non_object_entry_are_rejected() {
        assert!(matches!(
            parse_entries(r#"[{"key":42}]"#),
            Err(ExportError::InvalidEntryError { index: 0, .. })
        ));
        assert!(matches!(
            parse_entries(r#"[{"key":"a"},"b"]"#),
            Err(ExportError::InvalidEntryError { index: 1, .. })
        ));
        assert!(matches!(
            parse_entries(r#"[["a"]]"#),
            Err(ExportError::InvalidEntryError { index: 0, .. })
        ));
    }

    #[test]
    fn test_echo_and_load_write_two_lines() {
        let pipeline = pipeline(b"[{\"key\":\"a\"},{\"key\":\"b\"}]");
        let document = pipeline.extract().unwrap();
        let result = pipeline.transform(&document).unwrap();

        let mut out = Vec::new();
        pipeline.echo(&document, &mut out).unwrap();
        pipeline.load(&result, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "content: [{\"key\":\"a\"},{\"key\":\"b\"}]\na\nb\n"
        );
    }
}
