pub mod notification;

pub use notification::RotatingNotification;
