//! Typed request and response records for the Skald API.

pub mod chat;
pub mod filter;
pub mod memo;
pub mod search;

pub use chat::{ChatRequest, ChatResponse, GenerateDocRequest, GenerateDocResponse};
pub(crate) use chat::WithStreamFlag;
pub use filter::{Filter, FilterOperator, FilterType, FilterValue};
pub use memo::{
    CreateMemoBody, CreateMemoResponse, IdType, ListMemosParams, ListMemosResponse, Memo,
    MemoData, MemoListItem, Metadata, UpdateMemoData, UpdateMemoResponse,
};
pub use search::{SearchMethod, SearchRequest, SearchResponse, SearchResult};
