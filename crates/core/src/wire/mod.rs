//! Response envelope decoding
//!
//! Every API response is a protobuf `ResponseWrapper`, optionally gzip
//! framed. Decoding is all-or-nothing for the outer envelope. Prefetched
//! responses bundled inside it are decoded eagerly and dropped individually
//! when their embedded bytes are malformed.

pub mod convert;
pub mod messages;

use std::io::Read;
use std::sync::Arc;

use flate2::read::GzDecoder;
use playdl_domain::{PlayError, Result};
use prost::Message;
use tracing::warn;

use self::messages::{AndroidAppDeliveryData, DocV2, Payload, PreFetch, ResponseWrapper};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Parsed response envelope
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedResponse {
    pub payload: Option<Payload>,
    /// Prefetched responses in server order.
    pub prefetch: Vec<PrefetchEntry>,
}

/// Response the server bundled ahead of time for another request
#[derive(Debug, Clone, PartialEq)]
pub struct PrefetchEntry {
    /// Request URL as sent by the server (relative path plus query string).
    pub url: String,
    pub response: Arc<DecodedResponse>,
}

impl DecodedResponse {
    /// Document of a `details` payload.
    pub fn details_doc(&self) -> Option<&DocV2> {
        self.payload.as_ref()?.details_response.as_ref()?.doc_v2.as_ref()
    }

    /// Top-level documents of a list payload.
    pub fn list_docs(&self) -> Option<&[DocV2]> {
        self.payload.as_ref()?.list_response.as_ref().map(|list| list.doc.as_slice())
    }

    /// Delivery data of a purchase payload.
    pub fn delivery_data(&self) -> Option<&AndroidAppDeliveryData> {
        self.payload
            .as_ref()?
            .buy_response
            .as_ref()?
            .purchase_status_response
            .as_ref()?
            .app_delivery_data
            .as_ref()
    }
}

/// Decode a response body, inflating it first if it is gzip framed.
pub fn decode(bytes: &[u8]) -> Result<DecodedResponse> {
    let inflated;
    let raw = if bytes.starts_with(&GZIP_MAGIC) {
        inflated = inflate(bytes)?;
        inflated.as_slice()
    } else {
        bytes
    };

    let wrapper = ResponseWrapper::decode(raw)
        .map_err(|err| PlayError::Decode(format!("invalid response envelope: {err}")))?;

    Ok(from_wrapper(wrapper))
}

fn inflate(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut inflated = Vec::with_capacity(bytes.len() * 4);
    GzDecoder::new(bytes)
        .read_to_end(&mut inflated)
        .map_err(|err| PlayError::Decode(format!("invalid gzip framing: {err}")))?;
    Ok(inflated)
}

fn from_wrapper(wrapper: ResponseWrapper) -> DecodedResponse {
    let prefetch = wrapper.pre_fetch.into_iter().filter_map(decode_prefetch).collect();
    DecodedResponse { payload: wrapper.payload, prefetch }
}

fn decode_prefetch(entry: PreFetch) -> Option<PrefetchEntry> {
    let Some(url) = entry.url.filter(|url| !url.is_empty()) else {
        warn!("skipping prefetch entry without url");
        return None;
    };
    let Some(bytes) = entry.response else {
        warn!(url = %url, "skipping prefetch entry without response");
        return None;
    };

    match decode(&bytes) {
        Ok(response) => Some(PrefetchEntry { url, response: Arc::new(response) }),
        Err(err) => {
            warn!(url = %url, error = %err, "skipping undecodable prefetch entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::messages::{DetailsResponse, ListResponse};
    use super::*;

    fn details_wrapper(docid: &str) -> ResponseWrapper {
        ResponseWrapper {
            payload: Some(Payload {
                details_response: Some(DetailsResponse {
                    doc_v2: Some(DocV2 { docid: Some(docid.to_string()), ..Default::default() }),
                }),
                ..Default::default()
            }),
            pre_fetch: Vec::new(),
        }
    }

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn decodes_raw_envelope() {
        let decoded = decode(&details_wrapper("com.example").encode_to_vec()).unwrap();
        assert_eq!(decoded.details_doc().and_then(|doc| doc.docid.as_deref()), Some("com.example"));
        assert!(decoded.list_docs().is_none());
        assert!(decoded.prefetch.is_empty());
    }

    #[test]
    fn decodes_gzip_framed_envelope() {
        let bytes = gzip(&details_wrapper("com.example").encode_to_vec());
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.details_doc().map(DocV2::docid), Some("com.example"));
    }

    #[test]
    fn malformed_bytes_are_a_decode_error() {
        let err = decode(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, PlayError::Decode(_)));
    }

    #[test]
    fn truncated_gzip_is_a_decode_error() {
        let bytes = gzip(&details_wrapper("com.example").encode_to_vec());
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, PlayError::Decode(_)));
    }

    #[test]
    fn prefetch_entries_are_decoded_in_order() {
        let list = ResponseWrapper {
            payload: Some(Payload { list_response: Some(ListResponse::default()), ..Default::default() }),
            pre_fetch: Vec::new(),
        };
        let mut outer = details_wrapper("com.example");
        outer.pre_fetch = vec![
            PreFetch {
                url: Some("rec?doc=com.example&rt=1&c=3".to_string()),
                response: Some(list.encode_to_vec()),
                ..Default::default()
            },
            PreFetch {
                url: Some("details?doc=other".to_string()),
                response: Some(gzip(&details_wrapper("other").encode_to_vec())),
                ..Default::default()
            },
        ];

        let decoded = decode(&outer.encode_to_vec()).unwrap();
        let urls: Vec<_> = decoded.prefetch.iter().map(|entry| entry.url.as_str()).collect();
        assert_eq!(urls, ["rec?doc=com.example&rt=1&c=3", "details?doc=other"]);
        assert!(decoded.prefetch[0].response.list_docs().is_some());
        assert_eq!(decoded.prefetch[1].response.details_doc().map(DocV2::docid), Some("other"));
    }

    #[test]
    fn undecodable_prefetch_entry_is_skipped() {
        let mut outer = details_wrapper("com.example");
        outer.pre_fetch = vec![
            PreFetch {
                url: Some("details?doc=broken".to_string()),
                response: Some(vec![0xff, 0xff, 0xff]),
                ..Default::default()
            },
            PreFetch { url: None, response: Some(Vec::new()), ..Default::default() },
            PreFetch {
                url: Some("details?doc=ok".to_string()),
                response: Some(details_wrapper("ok").encode_to_vec()),
                ..Default::default()
            },
        ];

        let decoded = decode(&outer.encode_to_vec()).unwrap();
        assert_eq!(decoded.prefetch.len(), 1);
        assert_eq!(decoded.prefetch[0].url, "details?doc=ok");
        assert_eq!(decoded.details_doc().map(DocV2::docid), Some("com.example"));
    }
}
