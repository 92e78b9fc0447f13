pub mod query;
pub mod update;

pub use query::DataQueryPage;
pub use update::DataUpdatePage;
