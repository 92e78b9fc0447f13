pub mod file_list;
pub mod page;

pub use file_list::FileListPanel;
pub use page::FileUploadPage;
