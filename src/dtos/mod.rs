pub mod chatdtos;
pub mod dashboarddtos;
pub mod disputedtos;
pub mod gigdtos;
pub mod jobdtos;
pub mod notificationdtos;
pub mod orderdtos;
pub mod reviewdtos;
pub mod userdtos;
pub mod walletdtos;
