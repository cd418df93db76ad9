pub mod file_config_adapter;
pub mod eastmoney_adapter;
pub mod csv_report_adapter;
pub mod fixed_streak_adapter;
pub mod os_open;
