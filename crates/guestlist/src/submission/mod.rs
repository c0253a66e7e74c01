//! Server boundary: the shared-document submission log and the blob-store
//! gateway it reads and rewrites through.

pub mod blob;
pub mod router;
pub mod store;

pub use blob::{BlobError, BlobStore, HttpBlobStore};
pub use router::{submission_router, SUBMISSION_PATH};
pub use store::{StoreError, SubmissionRecord, SubmissionStore};
