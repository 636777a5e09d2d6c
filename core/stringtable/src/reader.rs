//! Stringtable XML reader.
//!
//! Expected shape:
//!
//! ```xml
//! <Project name="...">
//!   <Package name="...">
//!     <Container name="...">
//!       <Key ID="STR_A">
//!         <English>Variable</English>
//!       </Key>
//!     </Container>
//!   </Package>
//! </Project>
//! ```

use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, StringTableError};
use crate::types::{LoadOptions, StringTable};

const KEY_PARENTS: [&str; 3] = ["Project", "Package", "Container"];
const KEY_TAG: &str = "Key";
const ID_ATTR: &[u8] = b"ID";

struct KeyRecord {
    id: String,
    text: Option<String>,
}

fn xml_error(e: impl std::fmt::Display) -> StringTableError {
    StringTableError::Xml(e.to_string())
}

fn tag_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

fn key_id(e: &BytesStart) -> Result<String> {
    let attr = e.try_get_attribute(ID_ATTR).map_err(xml_error)?.ok_or_else(|| {
        StringTableError::Malformed(format!("<{}> record without an ID attribute", KEY_TAG))
    })?;
    Ok(attr.unescape_value().map_err(xml_error)?.to_string())
}

fn at_key_level(path: &[String]) -> bool {
    path.len() == KEY_PARENTS.len() && path.iter().zip(KEY_PARENTS).all(|(a, b)| a == b)
}

fn store(table: &mut StringTable, record: KeyRecord, language: &str) {
    match record.text {
        Some(text) => {
            if table.insert(record.id.clone(), text).is_some() {
                warn!("Duplicate stringtable key {:?}, keeping the last one", record.id);
            }
        }
        None => debug!("Key {:?} has no <{}> text, skipped", record.id, language),
    }
}

pub fn parse_string_table(xml: &str, options: &LoadOptions) -> Result<StringTable> {
    let language = options.language.as_str();
    let mut table = StringTable::new();
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut current: Option<KeyRecord> = None;
    let mut capture: Option<String> = None;
    let mut keys_seen = 0usize;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = tag_name(e);
                if name == KEY_TAG && at_key_level(&path) {
                    current = Some(KeyRecord {
                        id: key_id(e)?,
                        text: None,
                    });
                } else if current.is_some()
                    && name == language
                    && path.len() == KEY_PARENTS.len() + 1
                {
                    capture = Some(String::new());
                }
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                let name = tag_name(e);
                if name == KEY_TAG && at_key_level(&path) {
                    keys_seen += 1;
                    let record = KeyRecord {
                        id: key_id(e)?,
                        text: None,
                    };
                    store(&mut table, record, language);
                } else if name == language && path.len() == KEY_PARENTS.len() + 1 {
                    if let Some(record) = current.as_mut() {
                        record.text = Some(String::new());
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(text) = capture.as_mut() {
                    text.push_str(&e.unescape().map_err(xml_error)?);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(text) = capture.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                let name = path.pop().unwrap_or_default();
                if let Some(text) = capture.take_if(|_| name == language) {
                    if let Some(record) = current.as_mut() {
                        record.text = Some(text);
                    }
                } else if name == KEY_TAG && at_key_level(&path) {
                    if let Some(record) = current.take() {
                        keys_seen += 1;
                        store(&mut table, record, language);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_error(e)),
        }
        buf.clear();
    }

    if keys_seen == 0 {
        return Err(StringTableError::Malformed(format!(
            "no <{}> records found under <{}>",
            KEY_TAG,
            KEY_PARENTS.join("> <")
        )));
    }

    debug!("Loaded {} of {} stringtable keys", table.len(), keys_seen);
    Ok(table)
}
