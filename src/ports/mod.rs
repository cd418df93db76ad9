pub mod config_port;
pub mod quote_port;
pub mod streak_port;
pub mod report_port;
