pub mod gateway;
pub mod health;
pub mod notification;
pub mod response;
