pub mod batch;
pub mod rma;
pub mod upload;
