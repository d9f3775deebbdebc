pub mod common;

mod authorize_flow;
