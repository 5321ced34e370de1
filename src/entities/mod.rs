use crate::extension::{Extension, SchemeManager};

use photo::Photo;
use photo_group::PhotoGroup;

pub mod photo;
pub mod photo_group;

pub fn register_schemes(manager: &SchemeManager) -> &SchemeManager {
    manager.register(Photo::scheme());
    manager.register(PhotoGroup::scheme());

    manager
}

pub fn unregister_schemes(manager: &SchemeManager) -> &SchemeManager {
    manager.unregister(Photo::gvk().kind);
    manager.unregister(PhotoGroup::gvk().kind);

    manager
}
