//! Table components shared by the admin list views.

pub mod data_table;
pub mod tables;
