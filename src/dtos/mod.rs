pub mod gallery_page;
pub mod photo_group_vo;
pub mod photo_vo;

pub use gallery_page::GalleryPage;
pub use photo_group_vo::PhotoGroupVo;
pub use photo_vo::PhotoVo;
