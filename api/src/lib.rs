// wire types and the wrapper around the hosted backend
//
// the frontend only ever talks to the backend through the functions in auth,
// profile and portfolio.  each one forwards to exactly one BackendClient call
// and folds whatever went wrong into a BackendError
pub mod auth;
pub mod backend;
pub mod client;
pub mod portfolio;
pub mod profile;
pub mod supabase;

// also offered to the webapp's tests behind the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use backend::{BackendError, BackendResult, ErrorCode};
pub use client::BackendClient;
pub use supabase::SupabaseClient;
