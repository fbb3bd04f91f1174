pub mod configure;
pub mod db_init;
