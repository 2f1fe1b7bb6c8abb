pub mod header;
pub mod home;
pub mod prayers;
pub mod review;
pub mod settings;
pub mod stats;
pub mod tabs;
pub mod welcome;
