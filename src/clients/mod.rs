pub mod convert_client;
pub mod fetch_client;
