pub mod categorymodel;
pub mod chatmodels;
pub mod disputemodel;
pub mod gigmodel;
pub mod jobmodels;
pub mod notificationmodel;
pub mod ordermodel;
pub mod reviewmodel;
pub mod sessionmodel;
pub mod settingsmodel;
pub mod usermodel;
pub mod walletmodels;
