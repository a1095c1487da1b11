pub mod db;
pub mod notify;
