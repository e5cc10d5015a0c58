//! Local panel storage, selection wizard machinery, and the execution
//! service adapter behind the `vkm` automation panel.

pub mod auth;
pub mod flows;
pub mod model;
pub mod notify;
pub mod remote;
pub mod store;
pub mod wizard;
