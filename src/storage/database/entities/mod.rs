/// Code record entity module
pub mod code_record;

pub use code_record::Entity as CodeRecord;
