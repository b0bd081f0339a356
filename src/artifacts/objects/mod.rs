pub mod commit;
pub mod commit_id;

/// Length of the hex digest produced by the default content addresser
pub const OBJECT_ID_LENGTH: usize = 40;
