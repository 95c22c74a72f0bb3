//! Response models.
//!
//! Every model is a flat value decoded straight from a JSON body. Missing and `null`
//! fields decode to the zero value of their type, and numeric fields also accept
//! numbers sent as strings (`"views": "42"`), which the API does for some records.

pub mod clip;
pub mod oembed;
pub mod server_error;
pub mod url_check;

pub use clip::{ClipItem, LookupResponse};
pub use oembed::EmbedInfo;
pub use server_error::ServerError;
pub use url_check::UrlCheckResult;

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use serde_with::{DefaultOnNull, DeserializeAs, DisplayFromStr, PickFirst, Same, SerializeAs};

/// A number, a string holding a number, or `null` (decoded as zero).
pub(crate) type LenientNumber = DefaultOnNull<PickFirst<(Same, DisplayFromStr)>>;

/// A string, or a scalar (number or boolean) kept in its JSON text form.
pub(crate) struct ScalarString;

/// [`ScalarString`] with `null` decoded as an empty string.
pub(crate) type LenientString = DefaultOnNull<ScalarString>;

impl<'de> DeserializeAs<'de, String> for ScalarString {
    fn deserialize_as<D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
                Ok(value.to_string())
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
                Ok(value)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
                Ok(value.to_string())
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
                Ok(value.to_string())
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
                Ok(value.to_string())
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

impl SerializeAs<String> for ScalarString {
    fn serialize_as<S>(source: &String, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(source)
    }
}
