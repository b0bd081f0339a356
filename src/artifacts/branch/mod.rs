pub mod branch;
pub mod branch_name;
