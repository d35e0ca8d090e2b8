//! 補助機能レイヤー

pub mod logging;
