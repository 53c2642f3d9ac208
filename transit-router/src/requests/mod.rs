//! Request and response contract.
//!
//! Requests are a closed set of tagged unions deserialized with serde;
//! [`handle`] dispatches one request against a [`TransitCatalog`] and
//! [`process_batch`] runs a whole request document, answering queries in
//! the order they were given.
//!
//! [`TransitCatalog`]: crate::catalog::TransitCatalog

mod dto;
mod error;
mod process;

pub use dto::{
    BaseRequest, BusRequest, NOT_FOUND, Request, RequestDocument, Response, ResponseBody,
    RouteItemResult, SettingsRequest, StatRequest, StopRequest,
};
pub use error::RequestError;
pub use process::{handle, load_document, process_batch, read_document, write_responses};
