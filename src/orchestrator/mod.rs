//! オーケストレーションレイヤー

pub mod batch_processor;
pub mod sitting_processor;

pub use batch_processor::App;
pub use sitting_processor::process_sitting;
