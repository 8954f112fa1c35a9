pub mod management;
pub mod media;
pub mod system;

use crate::client::Omnia;
use crate::endpoints::management::*;
use crate::endpoints::media::*;
use crate::endpoints::system::*;

// Endpoint function namespaces

impl Omnia {
    pub const fn media(&self) -> Media {
        Media(self)
    }

    pub const fn management(&self) -> Management {
        Management(self)
    }

    pub const fn system(&self) -> System {
        System(self)
    }
}
