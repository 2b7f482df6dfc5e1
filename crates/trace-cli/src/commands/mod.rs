pub mod dispatch;
pub mod event;
pub mod scan;
pub mod schema;
pub mod submit;
pub mod trace;
