pub mod photo_finder;
pub mod photo_group_service;
pub mod photo_service;
pub mod setting_service;

pub use photo_finder::PhotoFinder;
pub use photo_group_service::PhotoGroupService;
pub use photo_service::PhotoService;
pub use setting_service::SettingService;
