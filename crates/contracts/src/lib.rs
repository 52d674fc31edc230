//! Wire contracts between the zookeeper back-office client and the REST API.
//!
//! Everything here is plain data: response envelopes, auth payloads, entity
//! records, form values and the client-side validation rules applied to them
//! before submission.

pub mod domain;
pub mod shared;
pub mod system;
