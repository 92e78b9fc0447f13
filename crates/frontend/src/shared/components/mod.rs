pub mod data_table;
pub mod loading_spinner;
pub mod message_alert;
pub mod upload_widget;

pub use data_table::{Align, CellFormat, Column, DataTable, RowKey};
pub use loading_spinner::LoadingSpinner;
pub use message_alert::{AlertMessage, AlertService, MessageAlert};
pub use upload_widget::UploadWidget;
