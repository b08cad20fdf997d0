mod common;

mod notification;
mod store;
