pub mod page;

pub use page::BatchExecutionPage;
