//! HTTP middleware and extractors

mod json_record;
mod request_id;

pub use json_record::{JsonRecord, JsonRecordRejection};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer, RequestIdService};
