pub mod attendance;
pub mod chat;
pub mod faculty;
pub mod student;
pub mod subject;

pub use attendance::*;
pub use chat::*;
pub use faculty::*;
pub use student::*;
pub use subject::*;
