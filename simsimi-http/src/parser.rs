//! Response parsing for the identity and relay endpoints

use crate::constants::STATUS_OK;
use crate::decoder::{decode_object, ObjectSeed, Slot};
use serde::de::{self, Deserializer as _, MapAccess, Visitor};
use simsimi_core::{Error, Identifier, RelayError, Result};
use std::fmt;

/// Parses SimSimi response bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct SimSimiParser;

impl SimSimiParser {
    /// Parse the identity endpoint's `{"uid", "uuid"}` object
    pub fn parse_identifier(&self, body: &[u8]) -> Result<Identifier> {
        let mut uid = 0;
        let mut uuid = String::new();

        decode_object(
            body,
            &mut [("uid", Slot::Int(&mut uid)), ("uuid", Slot::Str(&mut uuid))],
        )?;

        Ok(Identifier::new(uid, uuid))
    }

    /// Parse the relay endpoint's response into the reply text
    ///
    /// A bare JSON string is the service's way of rejecting the request and
    /// becomes [`Error::UnexpectedResponse`]. Objects are checked for a
    /// non-zero `errno` first, then for a status other than 200.
    pub fn parse_relay(&self, body: &[u8]) -> Result<String> {
        let mut fields = RelayFields::default();

        let mut de = serde_json::Deserializer::from_slice(body);
        let shape = (&mut de).deserialize_any(RelayVisitor {
            fields: &mut fields,
        })?;
        de.end()?;

        match shape {
            RelayShape::Bare(message) => Err(Error::UnexpectedResponse(message)),
            RelayShape::Object => fields.into_reply(),
        }
    }
}

/// Every key the relay endpoint may send, success and error shapes combined
#[derive(Debug, Default)]
struct RelayFields {
    status: i64,
    resp_sentence: String,
    code: String,
    errno: i64,
    sql_state: String,
    index: i64,
}

impl RelayFields {
    fn into_reply(self) -> Result<String> {
        if self.errno != 0 {
            return Err(Error::Relay(RelayError {
                code: self.code,
                errno: self.errno,
                sql_state: self.sql_state,
                index: self.index,
            }));
        }

        if self.status != STATUS_OK {
            return Err(Error::Status(self.status));
        }

        Ok(self.resp_sentence)
    }
}

/// Top-level kind of a relay body
enum RelayShape {
    Bare(String),
    Object,
}

/// Looks at the first token and either captures a bare string or hands the
/// object to the slot decoder
struct RelayVisitor<'f> {
    fields: &'f mut RelayFields,
}

impl<'de> Visitor<'de> for RelayVisitor<'_> {
    type Value = RelayShape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON string or object")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RelayShape::Bare(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RelayShape::Bare(v))
    }

    fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let fields = self.fields;
        let mut slots = [
            ("status", Slot::Int(&mut fields.status)),
            ("respSentence", Slot::Str(&mut fields.resp_sentence)),
            ("code", Slot::Str(&mut fields.code)),
            ("errno", Slot::Int(&mut fields.errno)),
            ("sqlState", Slot::Str(&mut fields.sql_state)),
            ("index", Slot::Int(&mut fields.index)),
        ];

        ObjectSeed::new(&mut slots)
            .visit_map(map)
            .map(|()| RelayShape::Object)
    }
}
