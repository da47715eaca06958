pub mod activity;
pub mod api_models;

pub use activity::{Activity, ActivityMap};
pub use api_models::{EmailQuery, ErrorDetail, MessageResponse};
