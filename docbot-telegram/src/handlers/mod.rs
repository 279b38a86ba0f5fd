//! Chat message handlers, executed through the docbot-core handler chain.

mod github_ref;
mod search;
mod start;

pub use github_ref::GithubRefHandler;
pub use search::DocSearchHandler;
pub use start::StartHandler;
