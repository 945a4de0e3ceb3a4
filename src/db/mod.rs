pub mod categorydb;
pub mod chatdb;
pub mod collection;
pub mod db;
pub mod disputedb;
pub mod gigdb;
pub mod jobdb;
pub mod keys;
pub mod notificationdb;
pub mod orderdb;
pub mod reviewdb;
pub mod sessiondb;
pub mod settingsdb;
pub mod storage;
pub mod userdb;
pub mod walletdb;
