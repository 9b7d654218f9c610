pub mod book;
pub mod search_kind;

pub use book::BookRecord;
pub use search_kind::SearchKind;
