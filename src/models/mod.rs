pub mod requests;
pub mod responses;

pub use requests::{ParseWordsRequest, StartGameRequest};
pub use responses::{CategoryResponse, ParsedWordsResponse, StartGameResponse};
