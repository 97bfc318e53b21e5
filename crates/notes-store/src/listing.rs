//! ListObjectsV2 response parsing

use crate::{key::is_note, ListPage, Result, StoreError};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Key,
    IsTruncated,
    NextContinuationToken,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"Key" => Some(Self::Key),
            b"IsTruncated" => Some(Self::IsTruncated),
            b"NextContinuationToken" => Some(Self::NextContinuationToken),
            _ => None,
        }
    }
}

/// Parse a bucket listing page.
///
/// Every `<Key>` element is collected regardless of nesting, in document order.
/// Key text is kept verbatim, surrounding whitespace included.
pub fn parse_list_page(xml: &str) -> Result<ListPage> {
    let mut reader = Reader::from_str(xml);

    let mut page = ListPage::default();
    let mut field = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                field = Field::from_tag(e.local_name().as_ref());
                text.clear();
            }
            Event::Text(t) if field.is_some() => {
                let unescaped = t.unescape().map_err(|e| StoreError::XmlParse(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) if field.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()))
            }
            Event::End(_) => {
                match field.take() {
                    Some(Field::Key) => page.keys.push(std::mem::take(&mut text)),
                    Some(Field::IsTruncated) => page.is_truncated = text.trim() == "true",
                    Some(Field::NextContinuationToken) if !text.trim().is_empty() => {
                        page.next_continuation_token = Some(text.trim().to_string())
                    }
                    _ => {}
                }
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(page)
}

/// Keys of a page that are Markdown notes, order preserved
pub fn note_keys(page: &ListPage) -> impl Iterator<Item = &String> {
    page.keys.iter().filter(|key| is_note(key))
}
