pub mod usage_client;
