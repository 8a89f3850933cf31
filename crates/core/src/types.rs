/// Identity of a persisted record, as assigned by the backing store.
pub type DbId = i64;
