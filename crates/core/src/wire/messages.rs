//! Response envelope messages
//!
//! Hand-maintained subset of the service's protobuf schema. Only the fields
//! the client reads are declared; unknown fields are skipped by the decoder.

/// Top-level response envelope
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseWrapper {
    #[prost(message, optional, tag = "1")]
    pub payload: Option<Payload>,
    #[prost(message, repeated, tag = "3")]
    pub pre_fetch: Vec<PreFetch>,
}

/// Endpoint-specific payload. At most one section is set per response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payload {
    #[prost(message, optional, tag = "1")]
    pub list_response: Option<ListResponse>,
    #[prost(message, optional, tag = "2")]
    pub details_response: Option<DetailsResponse>,
    #[prost(message, optional, tag = "4")]
    pub buy_response: Option<BuyResponse>,
}

/// Response the server pushes ahead for a URL the client is likely to request next
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PreFetch {
    #[prost(string, optional, tag = "1")]
    pub url: Option<String>,
    /// Serialized `ResponseWrapper`
    #[prost(bytes = "vec", optional, tag = "2")]
    pub response: Option<Vec<u8>>,
    #[prost(string, optional, tag = "3")]
    pub etag: Option<String>,
    #[prost(int64, optional, tag = "4")]
    pub ttl: Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub soft_ttl: Option<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListResponse {
    #[prost(message, repeated, tag = "2")]
    pub doc: Vec<DocV2>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DetailsResponse {
    #[prost(message, optional, tag = "4")]
    pub doc_v2: Option<DocV2>,
}

/// Catalog document. List containers carry their entries in `child`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DocV2 {
    #[prost(string, optional, tag = "1")]
    pub docid: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub title: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub creator: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub description_html: Option<String>,
    #[prost(message, repeated, tag = "11")]
    pub child: Vec<DocV2>,
    #[prost(message, optional, tag = "13")]
    pub details: Option<DocumentDetails>,
    #[prost(string, optional, tag = "16")]
    pub details_url: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DocumentDetails {
    #[prost(message, optional, tag = "1")]
    pub app_details: Option<AppDetails>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppDetails {
    #[prost(string, optional, tag = "1")]
    pub developer_name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub version_code: Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub version_string: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub title: Option<String>,
    #[prost(int64, optional, tag = "9")]
    pub installation_size: Option<i64>,
    #[prost(string, repeated, tag = "10")]
    pub permission: Vec<String>,
    #[prost(string, optional, tag = "13")]
    pub num_downloads: Option<String>,
    #[prost(string, optional, tag = "14")]
    pub package_name: Option<String>,
    #[prost(string, optional, tag = "16")]
    pub upload_date: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuyResponse {
    #[prost(message, optional, tag = "39")]
    pub purchase_status_response: Option<PurchaseStatusResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PurchaseStatusResponse {
    #[prost(int32, optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(message, optional, tag = "8")]
    pub app_delivery_data: Option<AndroidAppDeliveryData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndroidAppDeliveryData {
    #[prost(int64, optional, tag = "1")]
    pub download_size: Option<i64>,
    #[prost(string, optional, tag = "3")]
    pub download_url: Option<String>,
    #[prost(message, repeated, tag = "5")]
    pub download_auth_cookie: Vec<HttpCookie>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpCookie {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub value: Option<String>,
}
