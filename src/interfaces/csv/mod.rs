pub mod order_reader;
pub mod pay_config_reader;
