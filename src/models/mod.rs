pub mod field_error;
pub mod options;
pub mod pod;
pub mod pod_list;
pub mod quantity;
